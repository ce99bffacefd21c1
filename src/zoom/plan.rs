use crate::foundation::core::Dimensions;
use crate::foundation::error::{KenBurnsError, KenBurnsResult};

/// Upscale factor applied before the zoompan filter.
///
/// The pan is rendered against a box this many times larger than the output
/// and downsampled, which hides the integer-pixel stepping a zoom at output
/// resolution would show.
pub const PRESCALE_FACTOR: u32 = 4;

/// Frame count and zoom trajectory for one clip.
///
/// The zoom interpolates linearly in frame index from 1.0 to `zoom_factor`
/// over `total_frames` frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ZoomPlan {
    pub length_seconds: f64,
    pub frame_rate: f64,
    pub zoom_speed: f64,
    pub total_frames: u64,
    pub zoom_factor: f64,
}

impl ZoomPlan {
    pub fn new(length_seconds: f64, frame_rate: f64, zoom_speed: f64) -> KenBurnsResult<Self> {
        if !length_seconds.is_finite() || length_seconds <= 0.0 {
            return Err(KenBurnsError::invalid_parameter(
                "clip length must be > 0 seconds",
            ));
        }
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(KenBurnsError::invalid_parameter("frame rate must be > 0"));
        }
        if !zoom_speed.is_finite() || zoom_speed < 0.0 {
            return Err(KenBurnsError::invalid_parameter("zoom speed must be >= 0"));
        }

        let total_frames = (length_seconds * frame_rate) as u64;
        if total_frames < 1 {
            return Err(KenBurnsError::invalid_parameter(format!(
                "length {length_seconds}s at {frame_rate}fps yields no frames"
            )));
        }

        Ok(Self {
            length_seconds,
            frame_rate,
            zoom_speed,
            total_frames,
            zoom_factor: 1.0 + zoom_speed * length_seconds,
        })
    }
}

/// Full parameterization of one zoom/pan encode.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderPlan {
    /// High-resolution intermediate box the source is scaled to first.
    pub scale: Dimensions,
    /// Final output box.
    pub output: Dimensions,
    pub zoom: ZoomPlan,
}

impl RenderPlan {
    /// Derive the pre-scale box from the output box and the source size.
    ///
    /// The intermediate box never drops below the source's own resolution,
    /// so an already-large source is panned at native detail.
    pub fn new(original: Dimensions, output: Dimensions, zoom: ZoomPlan) -> Self {
        let scale = Dimensions {
            width: (output.width * PRESCALE_FACTOR).max(original.width),
            height: (output.height * PRESCALE_FACTOR).max(original.height),
        };
        Self {
            scale,
            output,
            zoom,
        }
    }

    /// The ffmpeg `-vf` chain for this plan.
    ///
    /// Built from validated numeric fields only; no caller-supplied string
    /// ever reaches the expression. The pan stays centered: the crop origin
    /// tracks the scaled image's center minus half the zoomed viewport.
    pub fn filtergraph(&self) -> String {
        let z = &self.zoom;
        format!(
            "scale={sw}:{sh},zoompan=z='min(1+({speed}*{len})*on/{frames}, {zmax})':d={frames}:x='iw/2-(iw/zoom/2)':y='ih/2-(ih/zoom/2)':s={out},fps={fps}",
            sw = self.scale.width,
            sh = self.scale.height,
            speed = z.zoom_speed,
            len = z.length_seconds,
            frames = z.total_frames,
            zmax = z.zoom_factor,
            out = self.output,
            fps = z.frame_rate,
        )
    }
}
