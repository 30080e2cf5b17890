//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how*: the
//! [`operations`](super::operations) module fills them in from a crop plan,
//! the [`backend`](super::backend) executes them. Keeping the interface as
//! plain data lets orchestration tests run against a recording mock instead
//! of real pixel work.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Uniform resize of the whole source image to an exact target size.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}

/// Crop the top-left `crop_width` × `crop_height` rectangle, then resize it
/// to exactly `width` × `height`.
#[derive(Debug, Clone, PartialEq)]
pub struct CropResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub crop_width: u32,
    pub crop_height: u32,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_90() {
        assert_eq!(Quality::default().value(), 90);
    }
}
