use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{KenBurnsError, KenBurnsResult};

/// A local copy of the conversion source image.
///
/// Downloaded sources own their temp file: dropping the handle removes it
/// best-effort, so cleanup runs on every exit path, success or failure. A
/// source that was already a local path is passed through and never deleted.
#[derive(Debug)]
pub struct FetchedSource {
    path: PathBuf,
    owned: bool,
}

impl FetchedSource {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for FetchedSource {
    fn drop(&mut self) {
        if self.owned
            && let Err(e) = std::fs::remove_file(&self.path)
        {
            // Leaking a temp file is not worth failing the conversion over.
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove downloaded source image"
            );
        }
    }
}

/// Bring the conversion source to a local file.
///
/// `http`/`https` URLs are downloaded into `work_dir` under a name derived
/// from `job_id`; anything else is treated as a filesystem path.
pub fn fetch_source(source: &str, work_dir: &Path, job_id: &str) -> KenBurnsResult<FetchedSource> {
    if !is_remote(source) {
        let path = PathBuf::from(source);
        if !path.is_file() {
            return Err(KenBurnsError::download(format!(
                "source file '{}' does not exist",
                path.display()
            )));
        }
        return Ok(FetchedSource { path, owned: false });
    }

    let response = reqwest::blocking::get(source)
        .map_err(|e| KenBurnsError::download(format!("request for '{source}' failed: {e}")))?;
    let status = response.status();
    if !status.is_success() {
        return Err(KenBurnsError::download(format!(
            "request for '{source}' returned status {status}"
        )));
    }
    let bytes = response
        .bytes()
        .map_err(|e| KenBurnsError::download(format!("reading body of '{source}' failed: {e}")))?;

    std::fs::create_dir_all(work_dir)
        .with_context(|| format!("create work directory '{}'", work_dir.display()))?;
    let path = work_dir.join(format!("{job_id}_source.{}", source_extension(source)));
    std::fs::write(&path, &bytes)
        .with_context(|| format!("write downloaded source to '{}'", path.display()))?;

    tracing::info!(
        url = source,
        path = %path.display(),
        bytes = bytes.len(),
        "downloaded source image"
    );
    Ok(FetchedSource { path, owned: true })
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// File extension for the temp copy, taken from the URL path with query and
/// fragment stripped. Falls back to a neutral suffix; the image probe sniffs
/// content, not names.
fn source_extension(url: &str) -> &str {
    let tail = url.split(['?', '#']).next().unwrap_or(url);
    match tail.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.len() <= 4 && !ext.contains('/') => ext,
        _ => "img",
    }
}
