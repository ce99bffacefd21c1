//! kenburns turns a still image into an MP4 clip with a progressive zoom and
//! centered pan (the "Ken Burns" effect) by deriving a render plan and
//! driving the system `ffmpeg` binary.
//!
//! # Pipeline overview
//!
//! 1. **Fetch**: bring the source image to a local path
//! 2. **Probe**: read its pixel dimensions
//! 3. **Resolve**: map (source box, aspect ratio, resolution, fit mode) to
//!    the output box ([`resolve`])
//! 4. **Plan**: derive the 4x pre-scale box and the per-frame zoom schedule
//!    ([`RenderPlan`])
//! 5. **Encode**: run `ffmpeg` with a filtergraph built from the plan
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure resolution**: the dimension arithmetic is deterministic and free
//!   of I/O.
//! - **Typed presets**: aspect/resolution/fit names parse into closed enums;
//!   an unknown name is an error, never silently ignored.
//! - **No string interpolation of caller input**: the ffmpeg filtergraph is
//!   generated from validated numeric fields only.
#![forbid(unsafe_code)]

mod assets;
mod convert;
mod encode;
mod foundation;
mod layout;
mod presets;
mod zoom;

pub use assets::fetch::{FetchedSource, fetch_source};
pub use assets::probe::probe_image;
pub use convert::{ConvertOpts, ConvertRequest, convert, convert_with_encoder, derive_plan};
pub use encode::ffmpeg::{
    EncodeRequest, Encoder, FfmpegEncoder, ensure_parent_dir, is_ffmpeg_on_path,
};
pub use foundation::core::Dimensions;
pub use foundation::error::{KenBurnsError, KenBurnsResult};
pub use layout::solver::resolve;
pub use presets::{AspectRatio, FitMode, Resolution};
pub use zoom::plan::{PRESCALE_FACTOR, RenderPlan, ZoomPlan};
