//! High-level image operations.
//!
//! [`crop_to_target`] joins the pieces for a single (image, dimension) pair:
//! plan the geometry, build the backend parameters, execute. The output
//! file's parent directory is created on demand — idempotently, so a
//! pre-existing dimension bucket is success, not a conflict. A skipped pair
//! touches nothing on disk.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{CropPlan, GeometryError, plan_crop};
use super::params::{CropResizeParams, Quality, ResizeParams};
use crate::types::Dimension;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of one (image, dimension) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropOutcome {
    /// The file was written at exactly the target size.
    Written { path: PathBuf },
    /// Target exceeds the source in at least one axis; nothing was written.
    Skipped,
}

/// Read source dimensions through the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32), BackendError> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Transform one source image to one exact target size, writing the result
/// to `output_file`.
pub fn crop_to_target(
    backend: &impl ImageBackend,
    source: &Path,
    source_dims: (u32, u32),
    output_file: &Path,
    target: Dimension,
    quality: Quality,
) -> Result<CropOutcome, CropError> {
    let plan = plan_crop(source_dims, (target.width, target.height))?;
    if plan == CropPlan::Skip {
        return Ok(CropOutcome::Skipped);
    }

    if let Some(parent) = output_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match plan {
        // handled above; the remaining plans all write
        CropPlan::Skip => {}
        CropPlan::Resize => {
            backend.resize(&ResizeParams {
                source: source.to_path_buf(),
                output: output_file.to_path_buf(),
                width: target.width,
                height: target.height,
                quality,
            })?;
        }
        CropPlan::CropThenResize { width, height } => {
            backend.crop_resize(&CropResizeParams {
                source: source.to_path_buf(),
                output: output_file.to_path_buf(),
                crop_width: width,
                crop_height: height,
                width: target.width,
                height: target.height,
                quality,
            })?;
        }
    }

    Ok(CropOutcome::Written {
        path: output_file.to_path_buf(),
    })
}
