//! # batchcrop
//!
//! Crop and resize a folder of images to exact target resolutions without
//! distortion. Every source image is processed at every requested
//! `(width, height)` dimension; each successful crop lands in a
//! deterministic per-run, per-dimension subfolder.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Validate   raw "WxH" pairs  →  Vec<Dimension>   (pure, pre-I/O)
//! 2. Scan       source folder    →  Vec<SourceImage> (ordered, filtered)
//! 3. Process    images × dims    →  BatchSummary     (crop, write, tally)
//! ```
//!
//! Validation and scanning run strictly before any pixel work, so an invalid
//! request never leaves partial output behind. The processing stage is
//! sequential by design — each (image, dimension) pair's transform and write
//! completes before the next begins, and a skipped pair never aborts the
//! batch.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`validate`] | raw dimension-string pairs → typed [`types::Dimension`] list, fixed error priority |
//! | [`scan`] | source-folder discovery: recognized formats, deterministic order |
//! | [`imaging`] | crop geometry (pure), backend trait, `image`-crate backend |
//! | [`naming`] | output path policy: hour-bucket timestamp, `{W}X{H}` naming |
//! | [`process`] | batch orchestration: N×M loop, skip tally, outcome classification |
//! | [`config`] | optional `batchcrop.toml`: quality and default dimensions |
//! | [`output`] | CLI reporting — pure `format_*` functions + print wrappers |
//! | [`types`] | shared `Dimension` type |
//!
//! # Design Decisions
//!
//! ## Never Upscale
//!
//! A target larger than the source in either axis is skipped, not upscaled.
//! Upscaling invents pixels and degrades quality; the tool's contract is
//! that every written file contains only downsampled source content.
//! Skips are tallied and reported, never fatal.
//!
//! ## Crop Before Resize, Top-Left Anchored
//!
//! To hit an exact target size from a mismatched aspect ratio, the engine
//! first crops a strip whose ratio matches the target, then resizes
//! uniformly. The strip is anchored at the top-left corner — kept for
//! output compatibility with existing trees, though center-cropping is the
//! visually nicer candidate.
//!
//! ## Hour-Bucket Output Folders
//!
//! Outputs are grouped under `{timestamp}_{W}X{H}` subfolders, where the
//! timestamp concatenates year/month/day/hour without padding. Re-running
//! within the same hour overwrites — an accepted property, useful for
//! iterating on a batch without accumulating stale folders.
//!
//! ## Pure-Rust Imaging
//!
//! All decoding and encoding goes through the `image` crate — no
//! ImageMagick, no system dependencies. The binary is self-contained.
//! The backend sits behind the [`imaging::ImageBackend`] trait so
//! orchestration logic is tested against a recording mock instead of real
//! pixel work.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;
pub mod types;
pub mod validate;
