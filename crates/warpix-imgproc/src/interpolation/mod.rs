//! Pixel interpolation methods for image transformations.
//!
//! This module provides the resampling kernels used when warping images:
//! given a real-valued source coordinate, a kernel either produces a pixel
//! value from the source image or reports that its sampling footprint left
//! the image bounds.
//!
//! # Interpolation Modes
//!
//! - **Bilinear**: weighted average over the four nearest lattice pixels
//! - **Nearest**: value of the nearest pixel (no interpolation)
//!
//! Out-of-bounds footprints are not errors: kernels return
//! [`Sample::OutOfBounds`] and the caller decides what to do with the
//! destination pixel (typically: keep its background value).

mod bilinear;

/// Grid generation and coordinate mapping utilities.
pub mod grid;

pub(crate) mod interpolate;
mod nearest;
mod remap;

pub use interpolate::{interpolate_pixel, InterpolationMode, Sample};
pub use remap::remap;
