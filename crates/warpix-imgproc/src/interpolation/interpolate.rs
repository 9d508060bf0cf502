use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use warpix_image::{Image, ImageDtype};

/// Interpolation mode for resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Result of sampling a source image at a real-valued coordinate.
///
/// The channel values are kept in `f32`; conversion back to the storage type
/// happens at the write site via [`ImageDtype::from_f32`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample<const C: usize> {
    /// The sampling footprint was fully inside the source image.
    Sampled([f32; C]),
    /// Part of the sampling footprint fell outside the source image.
    OutOfBounds,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (H, W, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel values, or [`Sample::OutOfBounds`] if the
/// footprint around `(u, v)` is not fully contained in the image.
pub fn interpolate_pixel<T, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
) -> Sample<C>
where
    T: ImageDtype,
{
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
    }
}
