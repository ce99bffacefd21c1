use std::fmt;

use crate::foundation::error::{KenBurnsError, KenBurnsResult};

/// A positive pixel box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> KenBurnsResult<Self> {
        if width == 0 || height == 0 {
            return Err(KenBurnsError::invalid_parameter(
                "width/height must be non-zero",
            ));
        }
        Ok(Self { width, height })
    }

    pub fn ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Round both axes down to the nearest even value (minimum 2).
    ///
    /// yuv420p chroma subsampling requires even dimensions on both axes.
    pub fn floor_to_even(self) -> Self {
        Self {
            width: (self.width - self.width % 2).max(2),
            height: (self.height - self.height % 2).max(2),
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
