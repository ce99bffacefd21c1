use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::{
    foundation::error::{KenBurnsError, KenBurnsResult},
    zoom::plan::RenderPlan,
};

/// One ffmpeg invocation, fully specified.
///
/// Every argument derives from the validated numeric fields of the plan;
/// caller-supplied strings only ever name files.
#[derive(Clone, Debug)]
pub struct EncodeRequest {
    pub input: PathBuf,
    pub plan: RenderPlan,
    pub out_path: PathBuf,
    pub overwrite: bool,
}

impl EncodeRequest {
    pub fn validate(&self) -> KenBurnsResult<()> {
        if self.plan.output.width == 0 || self.plan.output.height == 0 {
            return Err(KenBurnsError::invalid_parameter(
                "output width/height must be non-zero",
            ));
        }
        if !self.plan.output.width.is_multiple_of(2) || !self.plan.output.height.is_multiple_of(2)
        {
            // We target yuv420p output for maximum player compatibility.
            return Err(KenBurnsError::invalid_parameter(
                "output width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        if self.plan.zoom.total_frames < 1 {
            return Err(KenBurnsError::invalid_parameter(
                "encode must cover at least one frame",
            ));
        }
        Ok(())
    }
}

/// Encoding collaborator seam.
///
/// The production implementation shells out to the system `ffmpeg` binary;
/// tests substitute their own.
pub trait Encoder {
    fn encode(&self, request: &EncodeRequest) -> KenBurnsResult<()>;
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub fn ensure_parent_dir(path: &Path) -> KenBurnsResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Runs the system `ffmpeg` binary.
///
/// We intentionally shell out rather than link FFmpeg to avoid native dev
/// header/lib requirements. The call blocks until the process exits; no
/// deadline is imposed here, so callers wanting cancellation must enforce
/// one externally.
#[derive(Clone, Copy, Debug, Default)]
pub struct FfmpegEncoder;

impl Encoder for FfmpegEncoder {
    fn encode(&self, request: &EncodeRequest) -> KenBurnsResult<()> {
        request.validate()?;
        ensure_parent_dir(&request.out_path)?;

        if !request.overwrite && request.out_path.exists() {
            return Err(KenBurnsError::invalid_parameter(format!(
                "output file '{}' already exists",
                request.out_path.display()
            )));
        }

        if !is_ffmpeg_on_path() {
            return Err(KenBurnsError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let zoom = &request.plan.zoom;
        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        cmd.arg(if request.overwrite { "-y" } else { "-n" });
        cmd.args([
            "-loglevel",
            "error",
            "-framerate",
            &zoom.frame_rate.to_string(),
            "-loop",
            "1",
            "-i",
        ])
        .arg(&request.input)
        .args([
            "-vf",
            &request.plan.filtergraph(),
            "-c:v",
            "libx264",
            "-r",
            &zoom.frame_rate.to_string(),
            "-t",
            &zoom.length_seconds.to_string(),
            "-pix_fmt",
            "yuv420p",
        ])
        .arg(&request.out_path);

        tracing::debug!(?cmd, "running ffmpeg");

        let output = cmd.output().map_err(|e| {
            KenBurnsError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(KenBurnsError::encode(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
