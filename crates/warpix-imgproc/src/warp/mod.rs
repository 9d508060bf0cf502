//! Geometric warps driven by inverse mapping: for every output pixel the
//! corresponding source coordinate is computed and resampled.

mod affine;

pub use affine::{inverse_map, warp_centered, ScaleGuard, TransformParams};
