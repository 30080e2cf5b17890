//! Image processing — pure Rust, zero external dependencies.
//!
//! The module is split into:
//! - **Calculations**: pure crop-geometry functions (unit testable, no I/O)
//! - **Parameters**: data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: high-level functions combining calculations + backend

pub mod backend;
pub mod calculations;
pub mod operations;
pub mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{CropPlan, GeometryError, plan_crop};
pub use operations::{CropError, CropOutcome, crop_to_target, get_dimensions};
pub use params::Quality;
pub use rust_backend::RustBackend;
