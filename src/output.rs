//! CLI output formatting.
//!
//! Each report has a `format_*` function returning `Vec<String>` (pure, no
//! I/O, unit-testable) and a thin `print_*` wrapper that writes to stdout.
//!
//! The batch summary is grouped per source image, batch order preserved:
//!
//! ```text
//! cat.png
//!     300x200 → /out/2024359_300X200/300X200_cat.png
//!     4000x4000: skipped (exceeds source size)
//! dog.jpg
//!     300x200 → /out/2024359_300X200/300X200_dog.jpg
//!
//! 3 of 4 files written, 1 skipped: target exceeds source size
//! ```

use crate::process::{BatchOutcome, BatchSummary, PairOutcome};
use crate::scan::SourceImage;
use crate::types::Dimension;

/// Indentation: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the batch summary grouped per source image, with the aggregate
/// classification as the final line.
pub fn format_batch_summary(summary: &BatchSummary) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_source: Option<&str> = None;

    for pair in &summary.pairs {
        if current_source != Some(pair.source.as_str()) {
            current_source = Some(pair.source.as_str());
            lines.push(pair.source.clone());
        }
        match &pair.outcome {
            PairOutcome::Written { path } => {
                lines.push(format!(
                    "{}{} → {}",
                    indent(1),
                    pair.dimension,
                    path.display()
                ));
            }
            PairOutcome::Skipped => {
                lines.push(format!(
                    "{}{}: skipped (exceeds source size)",
                    indent(1),
                    pair.dimension
                ));
            }
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(classification_line(summary));
    lines
}

fn classification_line(summary: &BatchSummary) -> String {
    match summary.outcome() {
        BatchOutcome::FullSuccess => {
            format!("All images cropped ({} files written)", summary.written_count())
        }
        BatchOutcome::PartialSuccess { skipped } => format!(
            "{} of {} files written, {} skipped: target exceeds source size",
            summary.written_count(),
            summary.total(),
            skipped
        ),
        BatchOutcome::TotalFailure => {
            "All dimensions exceed every source image; nothing written".to_string()
        }
    }
}

/// Format the `check` report: what was found and what would be requested.
pub fn format_check_output(images: &[SourceImage], dimensions: &[Dimension]) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("{} source images", images.len()));
    for image in images {
        lines.push(format!("{}{}", indent(1), image.file_name));
    }

    lines.push(format!("{} target dimensions", dimensions.len()));
    for dim in dimensions {
        lines.push(format!("{}{}", indent(1), dim));
    }

    lines
}

pub fn print_batch_summary(summary: &BatchSummary) {
    for line in format_batch_summary(summary) {
        println!("{line}");
    }
}

pub fn print_check_output(images: &[SourceImage], dimensions: &[Dimension]) {
    for line in format_check_output(images, dimensions) {
        println!("{line}");
    }
}
