use rayon::prelude::*;

use warpix_image::Image;

/// Apply a function to each output pixel and its source coordinates in parallel.
///
/// The destination image is split into row chunks so every invocation of `f`
/// writes a disjoint pixel location.
///
/// # Arguments
///
/// * `dst` - The destination image with shape (H, W, C).
/// * `map_x` - The x source coordinate of each destination pixel, row-major.
/// * `map_y` - The y source coordinate of each destination pixel, row-major.
/// * `f` - The resampling function applied per destination pixel.
pub fn par_iter_rows_resample<T, const C: usize>(
    dst: &mut Image<T, C>,
    map_x: &[f32],
    map_y: &[f32],
    f: impl Fn(&f32, &f32, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.cols();

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .zip(map_x.par_chunks_exact(cols))
        .zip(map_y.par_chunks_exact(cols))
        .for_each(|((dst_chunk, map_x_chunk), map_y_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x_chunk.iter().zip(map_y_chunk.iter()))
                .for_each(|(dst_pixel, (x, y))| {
                    f(x, y, dst_pixel);
                });
        });
}

#[cfg(test)]
mod tests {
    use warpix_image::{Image, ImageError, ImageSize};

    #[test]
    fn resample_visits_every_pixel() -> Result<(), ImageError> {
        let mut dst = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0.0,
        )?;

        let map_x = vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0];
        let map_y = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];

        super::par_iter_rows_resample(&mut dst, &map_x, &map_y, |&x, &y, dst_pixel| {
            dst_pixel[0] = 10.0 * y + x;
        });

        assert_eq!(dst.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);

        Ok(())
    }
}
