//! Source-folder discovery.
//!
//! Stage 1 of the batchcrop pipeline. Lists the source directory (one level,
//! no recursion — subfolders are someone else's batch) and keeps the files
//! whose extension matches a recognized raster format. Results are sorted by
//! file name so batch order, and therefore output-generation order, is
//! deterministic across runs.
//!
//! Recognized extensions, case-insensitive: `jpg, jpeg, png, gif, webp`.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid source folder: {0}")]
    InvalidSourcePath(PathBuf),
    #[error("no recognized image files in {0}")]
    NoValidImages(PathBuf),
}

/// A discovered source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Full path to the file.
    pub path: PathBuf,
    /// Base name (`cat.png`), used verbatim in output file names.
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// True if the path carries a recognized image extension.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// List the recognized images directly inside `root`, sorted by file name.
///
/// Fails with [`ScanError::InvalidSourcePath`] when `root` is missing or not
/// a directory, and [`ScanError::NoValidImages`] when the listing comes back
/// empty — both checked before any pixel work begins.
pub fn scan(root: &Path) -> Result<Vec<SourceImage>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::InvalidSourcePath(root.to_path_buf()));
    }

    let mut images: Vec<SourceImage> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_image_file(entry.path()))
        .map(|entry| SourceImage {
            path: entry.path().to_path_buf(),
            file_name: entry.file_name().to_string_lossy().into_owned(),
        })
        .collect();

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    if images.is_empty() {
        return Err(ScanError::NoValidImages(root.to_path_buf()));
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"stub").unwrap();
    }

    #[test]
    fn missing_root_is_invalid_source_path() {
        let err = scan(Path::new("/nonexistent/folder")).unwrap_err();
        assert!(matches!(err, ScanError::InvalidSourcePath(_)));
    }

    #[test]
    fn file_as_root_is_invalid_source_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "not-a-dir.jpg");
        let err = scan(&tmp.path().join("not-a-dir.jpg")).unwrap_err();
        assert!(matches!(err, ScanError::InvalidSourcePath(_)));
    }

    #[test]
    fn empty_folder_has_no_valid_images() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = scan(tmp.path()).unwrap_err();
        assert!(matches!(err, ScanError::NoValidImages(_)));
    }

    #[test]
    fn unrecognized_extensions_are_ignored() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "archive.tar");
        let err = scan(tmp.path()).unwrap_err();
        assert!(matches!(err, ScanError::NoValidImages(_)));
    }

    #[test]
    fn results_are_sorted_by_file_name() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "zebra.png");
        touch(tmp.path(), "alpha.jpg");
        touch(tmp.path(), "middle.webp");

        let names: Vec<String> = scan(tmp.path())
            .unwrap()
            .into_iter()
            .map(|i| i.file_name)
            .collect();
        assert_eq!(names, vec!["alpha.jpg", "middle.webp", "zebra.png"]);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "SHOUTING.JPG");
        touch(tmp.path(), "Mixed.WebP");

        let images = scan(tmp.path()).unwrap();
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn subdirectories_are_not_descended() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "top.gif");
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "deep.jpg");

        let images = scan(tmp.path()).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].file_name, "top.gif");
    }

    #[test]
    fn gif_and_jpeg_both_recognized() {
        assert!(is_image_file(Path::new("a.gif")));
        assert!(is_image_file(Path::new("b.jpeg")));
        assert!(!is_image_file(Path::new("c.tiff")));
        assert!(!is_image_file(Path::new("noext")));
    }
}
