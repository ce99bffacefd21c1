use std::path::PathBuf;

use crate::{
    assets::fetch::{FetchedSource, fetch_source},
    assets::probe::probe_image,
    encode::ffmpeg::{EncodeRequest, Encoder, FfmpegEncoder},
    foundation::error::{KenBurnsError, KenBurnsResult},
    layout::solver::resolve,
    presets::{AspectRatio, FitMode, Resolution},
    zoom::plan::{RenderPlan, ZoomPlan},
};

/// One image-to-video conversion request.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ConvertRequest {
    /// Image source: an `http`/`https` URL or a local path.
    pub source: String,
    /// Clip length in seconds.
    pub length_seconds: f64,
    /// Output frame rate.
    pub frame_rate: f64,
    /// Zoom-in speed per second (0 produces a static clip).
    pub zoom_speed: f64,
    /// Caller-supplied id naming the work files and the output file.
    pub job_id: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default)]
    pub fit_mode: FitMode,
}

/// Conversion environment knobs.
#[derive(Clone, Debug)]
pub struct ConvertOpts {
    /// Directory for downloaded sources and the output file.
    pub work_dir: PathBuf,
    /// Overwrite an existing output file.
    pub overwrite: bool,
}

impl Default for ConvertOpts {
    fn default() -> Self {
        Self {
            work_dir: std::env::temp_dir(),
            overwrite: true,
        }
    }
}

/// Convert a still image into a zoom/pan MP4 clip with the system `ffmpeg`.
///
/// One synchronous pass: fetch, probe, resolve, plan, encode. Returns the
/// output file path `<work_dir>/<job_id>.mp4`. Every failure is logged with
/// context and propagated unchanged in kind; nothing is retried. Concurrent
/// calls are independent as long as their job ids differ.
pub fn convert(request: &ConvertRequest, opts: &ConvertOpts) -> KenBurnsResult<PathBuf> {
    convert_with_encoder(request, opts, &FfmpegEncoder)
}

/// [`convert`] against a caller-supplied [`Encoder`].
#[tracing::instrument(skip_all, fields(job_id = %request.job_id))]
pub fn convert_with_encoder(
    request: &ConvertRequest,
    opts: &ConvertOpts,
    encoder: &dyn Encoder,
) -> KenBurnsResult<PathBuf> {
    let (source, plan) = prepare(request, opts)?;

    let out_path = opts.work_dir.join(format!("{}.mp4", request.job_id));
    let encode = EncodeRequest {
        input: source.path().to_path_buf(),
        plan,
        out_path: out_path.clone(),
        overwrite: opts.overwrite,
    };
    encoder
        .encode(&encode)
        .inspect_err(|e| tracing::error!(error = %e, "encode failed"))?;

    tracing::info!(out_path = %out_path.display(), "video created");
    Ok(out_path)
    // `source` drops here: a downloaded temp file is removed on success and
    // failure alike; a local caller path is left untouched.
}

/// Derive the render plan for a request without encoding anything.
#[tracing::instrument(skip_all, fields(job_id = %request.job_id))]
pub fn derive_plan(request: &ConvertRequest, opts: &ConvertOpts) -> KenBurnsResult<RenderPlan> {
    prepare(request, opts).map(|(_, plan)| plan)
}

fn prepare(
    request: &ConvertRequest,
    opts: &ConvertOpts,
) -> KenBurnsResult<(FetchedSource, RenderPlan)> {
    validate_job_id(&request.job_id)?;

    // Reject bad numeric parameters before touching the network.
    let zoom = ZoomPlan::new(request.length_seconds, request.frame_rate, request.zoom_speed)
        .inspect_err(|e| tracing::error!(error = %e, "invalid zoom parameters"))?;

    let source = fetch_source(&request.source, &opts.work_dir, &request.job_id)
        .inspect_err(|e| tracing::error!(error = %e, "source fetch failed"))?;

    let original = probe_image(source.path())
        .inspect_err(|e| tracing::error!(error = %e, "source image probe failed"))?;
    tracing::info!(%original, "probed source image");

    let resolved = resolve(
        original,
        request.aspect_ratio,
        request.resolution,
        request.fit_mode,
    );
    // The resolver is exact; the encoder's yuv420p profile needs even axes.
    let output = resolved.floor_to_even();
    let plan = RenderPlan::new(original, output, zoom);

    tracing::info!(
        aspect_ratio = %request.aspect_ratio,
        resolution = %request.resolution,
        fit_mode = %request.fit_mode,
        scale = %plan.scale,
        %output,
        total_frames = zoom.total_frames,
        zoom_factor = zoom.zoom_factor,
        "derived render plan"
    );

    Ok((source, plan))
}

/// Job ids name files inside the work dir, so they must not carry path
/// syntax.
fn validate_job_id(job_id: &str) -> KenBurnsResult<()> {
    let ok = !job_id.is_empty()
        && job_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !ok {
        return Err(KenBurnsError::invalid_parameter(format!(
            "job id '{job_id}' must be non-empty and use only [A-Za-z0-9_-]"
        )));
    }
    Ok(())
}
