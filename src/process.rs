//! Batch orchestration.
//!
//! Stage 2 of the batchcrop pipeline. Takes the validated dimension list and
//! the scanned source images and runs the full cross product — images outer,
//! dimensions inner — through the crop engine, tallying per-pair outcomes
//! into a [`BatchSummary`].
//!
//! ## Policy
//!
//! - Sequential and synchronous: each pair's transform and write completes
//!   before the next begins. No cancellation mid-batch.
//! - A skipped pair (target exceeds source) never aborts the batch; it only
//!   affects the final classification.
//! - Decode/encode failures abort the run. Already-written files stay on
//!   disk; there is no rollback.
//!
//! ## Classification
//!
//! Over `total = images × dimensions` pairs:
//! `skipped == 0` → full success, `skipped == total` → total failure,
//! anything else → partial success with the skip count.

use crate::imaging::{CropError, CropOutcome, ImageBackend, Quality, crop_to_target, get_dimensions};
use crate::naming::{CoarseTimestamp, output_paths};
use crate::scan::{self, ScanError, SourceImage};
use crate::types::Dimension;
use crate::validate::{DimensionError, validate_dimensions};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("source and output folders must both be given")]
    MissingFolder,
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("image processing failed: {0}")]
    Crop(#[from] CropError),
}

/// The validated batch unit: every image is processed at every dimension.
#[derive(Debug, Clone)]
pub struct CropRequest {
    pub images: Vec<SourceImage>,
    pub dimensions: Vec<Dimension>,
}

/// Result of one (image, dimension) pair, in batch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairRecord {
    pub source: String,
    pub dimension: Dimension,
    pub outcome: PairOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PairOutcome {
    /// File written at exactly the target size.
    Written { path: PathBuf },
    /// Target exceeds the source in at least one axis; nothing written.
    Skipped,
}

/// Aggregate result of a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub pairs: Vec<PairRecord>,
}

/// Classification of a completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BatchOutcome {
    FullSuccess,
    PartialSuccess { skipped: usize },
    TotalFailure,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.pairs.len()
    }

    pub fn written_count(&self) -> usize {
        self.pairs
            .iter()
            .filter(|p| matches!(p.outcome, PairOutcome::Written { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.pairs
            .iter()
            .filter(|p| p.outcome == PairOutcome::Skipped)
            .count()
    }

    pub fn outcome(&self) -> BatchOutcome {
        let skipped = self.skipped_count();
        if skipped == 0 {
            BatchOutcome::FullSuccess
        } else if skipped == self.total() {
            BatchOutcome::TotalFailure
        } else {
            BatchOutcome::PartialSuccess { skipped }
        }
    }
}

/// Run a validated request against an output root.
///
/// Source dimensions are read once per image. Per-dimension subfolders are
/// created on first successful write; skipped pairs touch nothing on disk.
pub fn run(
    backend: &impl ImageBackend,
    request: &CropRequest,
    output_root: &Path,
    ts: CoarseTimestamp,
    quality: Quality,
) -> Result<BatchSummary, ProcessError> {
    let mut pairs = Vec::with_capacity(request.images.len() * request.dimensions.len());

    for image in &request.images {
        let source_dims = get_dimensions(backend, &image.path).map_err(CropError::Backend)?;

        for &dimension in &request.dimensions {
            let (_dir, file) = output_paths(output_root, ts, dimension, &image.file_name);

            let outcome = crop_to_target(
                backend,
                &image.path,
                source_dims,
                &file,
                dimension,
                quality,
            )?;

            pairs.push(PairRecord {
                source: image.file_name.clone(),
                dimension,
                outcome: match outcome {
                    CropOutcome::Written { path } => PairOutcome::Written { path },
                    CropOutcome::Skipped => PairOutcome::Skipped,
                },
            });
        }
    }

    Ok(BatchSummary { pairs })
}

/// The full caller contract: raw folder strings and raw dimension pairs in,
/// classified summary out.
///
/// Checks run strictly before any image I/O: blank paths, dimension
/// validation, source scan. A validation failure therefore never leaves
/// partial output behind.
pub fn crop_folder(
    backend: &impl ImageBackend,
    source_folder: &str,
    output_folder: &str,
    raw_dimensions: &[(String, String)],
    ts: CoarseTimestamp,
    quality: Quality,
) -> Result<BatchSummary, ProcessError> {
    if source_folder.is_empty() || output_folder.is_empty() {
        return Err(ProcessError::MissingFolder);
    }

    let dimensions = validate_dimensions(raw_dimensions)?;
    let images = scan::scan(Path::new(source_folder))?;

    let request = CropRequest { images, dimensions };
    run(backend, &request, Path::new(output_folder), ts, quality)
}
