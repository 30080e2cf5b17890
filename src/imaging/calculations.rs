//! Pure crop-geometry functions.
//!
//! Everything here is testable without I/O or pixel data. Given a source
//! size and a target size, [`plan_crop`] decides which of three shapes the
//! transform takes:
//!
//! - the target exceeds the source in either axis → skip (never upscale)
//! - the aspect ratios already match → plain resize
//! - otherwise → crop a ratio-matching strip from the top-left corner,
//!   then resize that strip to the exact target

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("invalid dimension: width and height must be non-zero")]
    InvalidDimension,
}

/// The transform needed to take a source image to an exact target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropPlan {
    /// Target exceeds the source in at least one axis; the pair is skipped
    /// rather than upscaled.
    Skip,
    /// Aspect ratios match exactly; uniform resize of the whole image.
    Resize,
    /// Crop the `(0, 0, width, height)` rectangle first, then resize it to
    /// the target. The region's aspect ratio equals the target's.
    CropThenResize { width: u32, height: u32 },
}

/// Compute the crop plan for `source = (ow, oh)` and `target = (cw, ch)`.
///
/// Zero on any axis is rejected up front; the ratio math below divides by
/// both heights and both widths.
pub fn plan_crop(source: (u32, u32), target: (u32, u32)) -> Result<CropPlan, GeometryError> {
    let (ow, oh) = source;
    let (cw, ch) = target;

    if ow == 0 || oh == 0 || cw == 0 || ch == 0 {
        return Err(GeometryError::InvalidDimension);
    }
    if cw > ow || ch > oh {
        return Ok(CropPlan::Skip);
    }

    let ratio_target = cw as f64 / ch as f64;
    let ratio_original = ow as f64 / oh as f64;

    if ratio_target == ratio_original {
        Ok(CropPlan::Resize)
    } else if ratio_target < ratio_original {
        // Source is too wide: take a vertical strip of full height whose
        // width gives the target ratio once scaled down
        let new_width = (cw as f64 * (oh as f64 / ch as f64)).round() as u32;
        Ok(CropPlan::CropThenResize {
            width: new_width.clamp(1, ow),
            height: oh,
        })
    } else {
        // Source is too tall: symmetric horizontal strip of full width
        let new_height = (ch as f64 * (ow as f64 / cw as f64)).round() as u32;
        Ok(CropPlan::CropThenResize {
            width: ow,
            height: new_height.clamp(1, oh),
        })
    }
}
