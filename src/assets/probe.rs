use std::path::Path;

use crate::foundation::core::Dimensions;
use crate::foundation::error::{KenBurnsError, KenBurnsResult};

/// Read the pixel dimensions of an image file without decoding the pixels.
pub fn probe_image(path: &Path) -> KenBurnsResult<Dimensions> {
    let (width, height) = image::image_dimensions(path).map_err(|e| {
        KenBurnsError::unreadable_image(format!(
            "failed to read dimensions of '{}': {e}",
            path.display()
        ))
    })?;
    Dimensions::new(width, height).map_err(|_| {
        KenBurnsError::unreadable_image(format!(
            "image '{}' reports a zero dimension",
            path.display()
        ))
    })
}
