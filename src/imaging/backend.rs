//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations the pipeline
//! needs: identify, resize, and crop_resize. The production implementation
//! is [`RustBackend`](super::rust_backend::RustBackend) — pure Rust via the
//! `image` crate, statically linked. Orchestration tests use the recording
//! [`MockBackend`](tests::MockBackend) instead.

use super::params::{CropResizeParams, ResizeParams};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Implementations own decode and encode; callers own geometry and paths.
/// The source image is decoded per call and dropped afterwards — nothing is
/// cached between operations.
pub trait ImageBackend {
    /// Read image dimensions without a full decode where possible.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Uniform resize of the whole image to an exact size.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;

    /// Top-left crop followed by resize to an exact size.
    fn crop_resize(&self, params: &CropResizeParams) -> Result<(), BackendError>;
}
