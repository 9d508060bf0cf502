use super::interpolate::Sample;
use warpix_image::{Image, ImageDtype};

/// Kernel for bilinear interpolation
///
/// Samples the four lattice neighbors of `(u, v)` and blends them with
/// weights proportional to proximity. On an exact integer coordinate the
/// floor and ceil abscissae coincide; the upper one is pushed one cell out
/// so the two sample points on that axis stay distinct and no interpolation
/// weight is silently lost.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values, or [`Sample::OutOfBounds`] when any of the
/// four footprint corners lies outside the image.
pub(crate) fn bilinear_interpolation<T, const C: usize>(
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

    let x1 = u.floor();
    let mut x2 = u.ceil();
    let y1 = v.floor();
    let mut y2 = v.ceil();

    // widen the collapsed axis on exact integer coordinates
    if u >= x2 {
        x2 = (u + 1.0).ceil();
    }
    if v >= y2 {
        y2 = (v + 1.0).ceil();
    }

    let (ix1, ix2) = (x1 as i64, x2 as i64);
    let (iy1, iy2) = (y1 as i64, y2 as i64);

    if ix1 < 0 || ix2 >= cols as i64 || iy1 < 0 || iy2 >= rows as i64 {
        return Sample::OutOfBounds;
    }

    // proximity weights toward each abscissa
    let wx1 = 1.0 - (u - x1);
    let wx2 = 1.0 - (x2 - u);
    let wy1 = 1.0 - (v - y1);
    let wy2 = 1.0 - (y2 - v);

    let (ix1, ix2) = (ix1 as usize, ix2 as usize);
    let (iy1, iy2) = (iy1 as usize, iy2 as usize);

    let base00 = (iy1 * cols + ix1) * C;
    let base10 = (iy2 * cols + ix1) * C;
    let base01 = (iy1 * cols + ix2) * C;
    let base11 = (iy2 * cols + ix2) * C;

    let data = image.as_slice();

    let mut pixel = [0.0; C];
    for k in 0..C {
        let p00: f32 = data[base00 + k].into();
        let p10: f32 = data[base10 + k].into();
        let p01: f32 = data[base01 + k].into();
        let p11: f32 = data[base11 + k].into();

        pixel[k] = wx1 * wy1 * p00 + wx1 * wy2 * p10 + wx2 * wy1 * p01 + wx2 * wy2 * p11;
    }

    Sample::Sampled(pixel)
}
