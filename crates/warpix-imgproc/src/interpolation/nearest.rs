use super::interpolate::Sample;
use warpix_image::{Image, ImageDtype};

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The value of the nearest pixel, or [`Sample::OutOfBounds`] when the
/// rounded coordinate lies outside the image.
pub(crate) fn nearest_neighbor_interpolation<T, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
) -> Sample<C>
where
    T: ImageDtype,
{
    let (rows, cols) = (image.rows(), image.cols());

    if !u.is_finite() || !v.is_finite() {
        return Sample::OutOfBounds;
    }

    let iu = u.round() as i64;
    let iv = v.round() as i64;

    if iu < 0 || iu >= cols as i64 || iv < 0 || iv >= rows as i64 {
        return Sample::OutOfBounds;
    }

    let base = (iv as usize * cols + iu as usize) * C;
    let data = image.as_slice();

    let mut pixel = [0.0; C];
    for k in 0..C {
        pixel[k] = data[base + k].into();
    }

    Sample::Sampled(pixel)
}

#[cfg(test)]
mod tests {
    use super::nearest_neighbor_interpolation;
    use crate::interpolation::Sample;
    use warpix_image::{Image, ImageError, ImageSize};

    #[test]
    fn picks_nearest_pixel() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![10, 20, 30, 40],
        )?;

        assert_eq!(
            nearest_neighbor_interpolation(&image, 0.9, 0.2),
            Sample::Sampled([20.0])
        );
        assert_eq!(
            nearest_neighbor_interpolation(&image, 0.2, 0.9),
            Sample::Sampled([30.0])
        );

        Ok(())
    }

    #[test]
    fn rounding_past_the_edge_is_out_of_bounds() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![10, 20, 30, 40],
        )?;

        assert_eq!(
            nearest_neighbor_interpolation(&image, 1.6, 0.0),
            Sample::OutOfBounds
        );
        assert_eq!(
            nearest_neighbor_interpolation(&image, 0.0, -0.6),
            Sample::OutOfBounds
        );

        Ok(())
    }
}
