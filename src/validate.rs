//! Dimension validation — the gate every requested size passes before any
//! image I/O happens.
//!
//! Input arrives as raw string pairs exactly as the user typed them
//! (`--dim 300x200` → `("300", "200")`). Rules are checked per pair, in
//! list order, and the first violation wins:
//!
//! 1. [`DimensionError::BlankField`] — width or height is empty
//! 2. [`DimensionError::NonInteger`] — not all ASCII decimal digits
//! 3. [`DimensionError::NonPositive`] — parses but is zero
//!
//! An empty list validates to an empty `Vec` — requesting nothing is not an
//! error at this layer. Pure functions, no I/O, no hidden state.

use crate::types::Dimension;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("at least one width or height field is blank")]
    BlankField,
    #[error("dimensions must be integers")]
    NonInteger,
    #[error("dimensions must be positive integers")]
    NonPositive,
}

/// Validate a list of raw `(width, height)` string pairs and parse them into
/// [`Dimension`] values, preserving order.
pub fn validate_dimensions(raw: &[(String, String)]) -> Result<Vec<Dimension>, DimensionError> {
    let mut dimensions = Vec::with_capacity(raw.len());
    for (width, height) in raw {
        dimensions.push(validate_pair(width, height)?);
    }
    Ok(dimensions)
}

fn validate_pair(width: &str, height: &str) -> Result<Dimension, DimensionError> {
    if width.is_empty() || height.is_empty() {
        return Err(DimensionError::BlankField);
    }
    if !is_decimal(width) || !is_decimal(height) {
        return Err(DimensionError::NonInteger);
    }
    let w: u32 = width.parse().map_err(|_| DimensionError::NonInteger)?;
    let h: u32 = height.parse().map_err(|_| DimensionError::NonInteger)?;
    if w == 0 || h == 0 {
        return Err(DimensionError::NonPositive);
    }
    Ok(Dimension::new(w, h))
}

fn is_decimal(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Split a CLI `WxH` argument into the raw string pair the validator expects.
///
/// The separator is a single `x` or `X`. Anything malformed still produces a
/// pair so the validator owns the error classification:
/// - `"300x200"` → `("300", "200")`
/// - `"300"` → `("300", "")` — fails as `BlankField`
/// - `"300x200x100"` → `("300", "200x100")` — fails as `NonInteger`
pub fn split_dimension_arg(raw: &str) -> (String, String) {
    match raw.split_once(['x', 'X']) {
        Some((w, h)) => (w.to_string(), h.to_string()),
        None => (raw.to_string(), String::new()),
    }
}
