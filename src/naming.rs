//! Output path policy — where a cropped image lands and what it is called.
//!
//! Every successful crop is written to a per-run, per-dimension subfolder
//! under the output root:
//!
//! ```text
//! <root>/<timestamp>_<W>X<H>/<W>X<H>_<source file name>
//! ```
//!
//! - `<timestamp>` is the hour-granularity [`CoarseTimestamp`] of the run
//! - `<W>X<H>` uses the *cropped* image's pixel dimensions, uppercase `X`
//! - the source base name is carried verbatim, extension included
//!
//! Two runs within the same clock hour targeting the same dimension write to
//! the same subfolder and the same file names; last write wins. That is
//! accepted behavior, not a defect.

use crate::types::Dimension;
use chrono::{Datelike, Local, Timelike};
use std::path::{Path, PathBuf};

/// Hour-granularity timestamp used to bucket a batch run's output folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoarseTimestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl CoarseTimestamp {
    /// Capture the current local wall-clock hour.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
        }
    }

    /// Concatenate year, month, day and hour as plain decimal strings — no
    /// separators, no zero-padding: `(2024, 3, 5, 9)` → `"2024359"`.
    ///
    /// The format is ambiguous (month 11 day 1 reads like month 1 day 11)
    /// but is kept bit-exact for compatibility with existing output trees.
    pub fn compact(&self) -> String {
        format!("{}{}{}{}", self.year, self.month, self.day, self.hour)
    }
}

/// Subfolder name for one (run, dimension) bucket: `"2024359_300X200"`.
pub fn output_dir_name(ts: CoarseTimestamp, dim: Dimension) -> String {
    format!("{}_{}X{}", ts.compact(), dim.width, dim.height)
}

/// File name for one cropped image: `"300X200_cat.png"`.
pub fn output_file_name(dim: Dimension, source_file_name: &str) -> String {
    format!("{}X{}_{}", dim.width, dim.height, source_file_name)
}

/// Full `(subfolder, file)` paths for one (image, dimension) pair.
///
/// A trailing separator on `root` is tolerated and normalized away.
pub fn output_paths(
    root: &Path,
    ts: CoarseTimestamp,
    dim: Dimension,
    source_file_name: &str,
) -> (PathBuf, PathBuf) {
    let root = normalize_root(root);
    let dir = root.join(output_dir_name(ts, dim));
    let file = dir.join(output_file_name(dim, source_file_name));
    (dir, file)
}

fn normalize_root(root: &Path) -> PathBuf {
    let s = root.to_string_lossy();
    let trimmed = s.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        // "/" trims to nothing; keep the original root
        root.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: CoarseTimestamp = CoarseTimestamp {
        year: 2024,
        month: 3,
        day: 5,
        hour: 9,
    };

    #[test]
    fn compact_concatenates_without_padding() {
        assert_eq!(TS.compact(), "2024359");
    }

    #[test]
    fn compact_keeps_two_digit_components() {
        let ts = CoarseTimestamp {
            year: 2024,
            month: 11,
            day: 21,
            hour: 16,
        };
        assert_eq!(ts.compact(), "2024112116");
    }

    #[test]
    fn dir_name_uses_cropped_dimensions() {
        assert_eq!(output_dir_name(TS, Dimension::new(300, 200)), "2024359_300X200");
    }

    #[test]
    fn file_name_prefixes_dimensions() {
        assert_eq!(
            output_file_name(Dimension::new(300, 200), "cat.png"),
            "300X200_cat.png"
        );
    }

    #[test]
    fn paths_from_clean_root() {
        let (dir, file) = output_paths(Path::new("/out"), TS, Dimension::new(300, 200), "cat.png");
        assert_eq!(dir, PathBuf::from("/out/2024359_300X200"));
        assert_eq!(file, PathBuf::from("/out/2024359_300X200/300X200_cat.png"));
    }

    #[test]
    fn trailing_separator_is_normalized() {
        let (dir, _) = output_paths(Path::new("/out/"), TS, Dimension::new(300, 200), "cat.png");
        assert_eq!(dir, PathBuf::from("/out/2024359_300X200"));
    }

    #[test]
    fn bare_root_survives_normalization() {
        let (dir, _) = output_paths(Path::new("/"), TS, Dimension::new(10, 10), "a.jpg");
        assert_eq!(dir, PathBuf::from("/2024359_10X10"));
    }

    #[test]
    fn same_image_two_dimensions_never_collide() {
        let a = output_paths(Path::new("/out"), TS, Dimension::new(300, 200), "cat.png").1;
        let b = output_paths(Path::new("/out"), TS, Dimension::new(200, 300), "cat.png").1;
        assert_ne!(a, b);
    }
}
