//! Pure Rust image processing backend — zero external dependencies.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` |
//! | Decode (JPEG, PNG, GIF, WebP) | `image` crate (pure Rust decoders) |
//! | Crop | `image::DynamicImage::crop_imm` (top-left anchored region) |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → JPEG | `JpegEncoder` at the configured quality |
//! | Encode → PNG / GIF / WebP | format encoders (WebP lossless) |
//!
//! Output format is inferred from the output path's extension, which the
//! naming policy carries over from the source file unchanged.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{CropResizeParams, ResizeParams};
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, Frame, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("failed to decode {}: {}", path.display(), e))
        })
}

/// Encode a DynamicImage to the given path, inferring format from extension.
fn save_image(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);

    let encoded = match ext.as_str() {
        "jpg" | "jpeg" => {
            img.write_with_encoder(JpegEncoder::new_with_quality(writer, quality as u8))
        }
        "png" => img.write_with_encoder(PngEncoder::new(writer)),
        "gif" => {
            let mut encoder = GifEncoder::new(writer);
            encoder.encode_frame(Frame::new(img.to_rgba8()))
        }
        "webp" => img.write_with_encoder(WebPEncoder::new_lossless(writer)),
        other => {
            return Err(BackendError::ProcessingFailed(format!(
                "unsupported output format: {other}"
            )));
        }
    };

    encoded.map_err(|e| {
        BackendError::ProcessingFailed(format!("failed to encode {}: {}", path.display(), e))
    })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);
        save_image(&resized, &params.output, params.quality.value())
    }

    fn crop_resize(&self, params: &CropResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let region = img.crop_imm(0, 0, params.crop_width, params.crop_height);
        let resized = region.resize_exact(params.width, params.height, FilterType::Lanczos3);
        save_image(&resized, &params.output, params.quality.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::Quality;
    use image::RgbImage;

    /// Write a small valid JPEG with the given dimensions.
    fn create_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let file = std::fs::File::create(path).unwrap();
        let writer = std::io::BufWriter::new(file);
        img.write_with_encoder(JpegEncoder::new_with_quality(writer, 90))
            .unwrap();
    }

    fn create_test_png(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([64, (x % 256) as u8, (y % 256) as u8])
        });
        img.save(path).unwrap();
    }

    #[test]
    fn identify_synthetic_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.jpg");
        create_test_jpeg(&path, 200, 150);

        let dims = RustBackend::new().identify(&path).unwrap();
        assert_eq!(dims.width, 200);
        assert_eq!(dims.height, 150);
    }

    #[test]
    fn identify_nonexistent_file_errors() {
        let result = RustBackend::new().identify(Path::new("/nonexistent/image.jpg"));
        assert!(result.is_err());
    }

    #[test]
    fn resize_hits_exact_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 400, 200);

        let output = tmp.path().join("out.jpg");
        RustBackend::new()
            .resize(&ResizeParams {
                source,
                output: output.clone(),
                width: 200,
                height: 100,
                quality: Quality::new(85),
            })
            .unwrap();

        let (w, h) = image::image_dimensions(&output).unwrap();
        assert_eq!((w, h), (200, 100));
    }

    #[test]
    fn crop_resize_hits_exact_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.png");
        create_test_png(&source, 800, 400);

        let output = tmp.path().join("out.png");
        RustBackend::new()
            .crop_resize(&CropResizeParams {
                source,
                output: output.clone(),
                crop_width: 400,
                crop_height: 400,
                width: 200,
                height: 200,
                quality: Quality::default(),
            })
            .unwrap();

        let (w, h) = image::image_dimensions(&output).unwrap();
        assert_eq!((w, h), (200, 200));
    }

    #[test]
    fn crop_takes_the_top_left_region() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.png");
        // left half black, right half white
        let img = RgbImage::from_fn(200, 100, |x, _| {
            if x < 100 {
                image::Rgb([0, 0, 0])
            } else {
                image::Rgb([255, 255, 255])
            }
        });
        img.save(&source).unwrap();

        let output = tmp.path().join("out.png");
        RustBackend::new()
            .crop_resize(&CropResizeParams {
                source,
                output: output.clone(),
                crop_width: 100,
                crop_height: 100,
                width: 50,
                height: 50,
                quality: Quality::default(),
            })
            .unwrap();

        // everything kept came from the black left half
        let cropped = image::open(&output).unwrap().to_rgb8();
        assert!(cropped.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn output_keeps_source_format_gif() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("anim.gif");
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(120, 80, image::Rgb([10, 20, 30])));
        save_image(&img, &source, 90).unwrap();

        let output = tmp.path().join("out.gif");
        RustBackend::new()
            .resize(&ResizeParams {
                source,
                output: output.clone(),
                width: 60,
                height: 40,
                quality: Quality::default(),
            })
            .unwrap();

        let (w, h) = image::image_dimensions(&output).unwrap();
        assert_eq!((w, h), (60, 40));
    }

    #[test]
    fn webp_output_roundtrips() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("flat.webp");
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(90, 60, image::Rgb([5, 5, 5])));
        save_image(&img, &path, 90).unwrap();

        let dims = RustBackend::new().identify(&path).unwrap();
        assert_eq!((dims.width, dims.height), (90, 60));
    }

    #[test]
    fn unsupported_output_format_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 100, 100);

        let result = RustBackend::new().resize(&ResizeParams {
            source,
            output: tmp.path().join("out.tiff"),
            width: 50,
            height: 50,
            quality: Quality::default(),
        });
        assert!(result.is_err());
    }
}
