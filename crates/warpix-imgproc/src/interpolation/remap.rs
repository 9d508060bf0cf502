use crate::parallel;

use super::interpolate::{interpolate_pixel, Sample};
use super::InterpolationMode;
use warpix_image::{Image, ImageDtype, ImageError};

/// Apply a generic geometric transformation to an image.
///
/// Every destination pixel is resampled from the source coordinate given by
/// `map_x` and `map_y`. Destination pixels whose sampling footprint falls
/// outside the source image are left untouched, so whatever background the
/// destination was constructed with shows through.
///
/// # Arguments
///
/// * `src` - The input image container with shape (H, W, C).
/// * `dst` - The output image container with shape (H, W, C).
/// * `map_x` - The x source coordinate of each destination pixel, row-major.
/// * `map_y` - The y source coordinate of each destination pixel, row-major.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// * The two maps must have the same length.
/// * The maps must have one entry per destination pixel.
pub fn remap<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    map_x: &[f32],
    map_y: &[f32],
    interpolation: InterpolationMode,
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    if map_x.len() != map_y.len() {
        return Err(ImageError::InvalidChannelShape(map_x.len(), map_y.len()));
    }

    if map_x.len() != dst.rows() * dst.cols() {
        return Err(ImageError::InvalidChannelShape(
            map_x.len(),
            dst.rows() * dst.cols(),
        ));
    }

    // parallelize the resampling by destination rows
    parallel::par_iter_rows_resample(dst, map_x, map_y, |&x, &y, dst_pixel| {
        match interpolate_pixel(src, x, y, interpolation) {
            Sample::Sampled(pixel) => {
                dst_pixel
                    .iter_mut()
                    .zip(pixel.iter())
                    .for_each(|(d, &p)| *d = T::from_f32(p));
            }
            // keep the destination's background value
            Sample::OutOfBounds => {}
        }
    });

    Ok(())
}
