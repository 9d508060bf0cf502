use std::f32::consts::PI;

use warpix_image::{Image, ImageDtype, ImageError, ImageSize};

use crate::interpolation::{grid::meshgrid_from_fn, remap, InterpolationMode};

/// Policy deciding when the inverse scale is applied.
///
/// The scale step divides both coordinates by their factors, or skips both
/// axes entirely; it never skips a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleGuard {
    /// Apply the inverse scale when at least one factor is positive.
    ///
    /// A non-positive factor on the other axis is still divided by, so a
    /// zero factor yields non-finite coordinates there and the resampler
    /// drops those pixels.
    #[default]
    EitherPositive,
    /// Apply the inverse scale only when both factors are positive.
    BothPositive,
}

/// Parameters of a composite scale-shear-rotate-translate transform defined
/// about the image center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    /// Horizontal scale factor.
    pub x_scale: f32,
    /// Vertical scale factor.
    pub y_scale: f32,
    /// Horizontal translation in pixels.
    pub x_trans: f32,
    /// Vertical translation in pixels.
    pub y_trans: f32,
    /// Rotation angle in degrees.
    pub theta: f32,
    /// Shear factor along x, driven by y.
    pub shear: f32,
    /// Policy deciding when the inverse scale is applied.
    pub scale_guard: ScaleGuard,
}

impl Default for TransformParams {
    /// The identity transform.
    fn default() -> Self {
        Self {
            x_scale: 1.0,
            y_scale: 1.0,
            x_trans: 0.0,
            y_trans: 0.0,
            theta: 0.0,
            shear: 0.0,
            scale_guard: ScaleGuard::default(),
        }
    }
}

/// Maps an output pixel coordinate to its source coordinate by undoing the
/// forward transform chain, centered on the image midpoint.
///
/// The inverse steps run in a fixed order (they do not commute): recenter,
/// inverse translation, inverse scale (subject to the guard), inverse shear,
/// inverse rotation, un-recenter. The half extents are integer-truncated to
/// match the lattice center used by the forward transform.
///
/// # Arguments
///
/// * `params` - The transform parameters.
/// * `size` - The size of the output image.
/// * `x` - The x coordinate of the output pixel.
/// * `y` - The y coordinate of the output pixel.
///
/// # Returns
///
/// The real-valued source coordinate. It may lie outside the source image;
/// the resampler owns that case.
pub fn inverse_map(params: &TransformParams, size: ImageSize, x: f32, y: f32) -> (f32, f32) {
    let half_w = (size.width / 2) as f32;
    let half_h = (size.height / 2) as f32;

    // go to center
    let mut x = x - half_w;
    let mut y = y - half_h;

    // inverse translation
    x -= params.x_trans;
    y -= params.y_trans;

    // inverse scale
    let scale_applies = match params.scale_guard {
        ScaleGuard::EitherPositive => params.x_scale > 0.0 || params.y_scale > 0.0,
        ScaleGuard::BothPositive => params.x_scale > 0.0 && params.y_scale > 0.0,
    };
    if scale_applies {
        x /= params.x_scale;
        y /= params.y_scale;
    }

    // inverse shear
    x -= params.shear * y;

    // inverse rotation, both outputs from the pre-rotation pair
    let rad = params.theta * PI / 180.0;
    let (sin, cos) = rad.sin_cos();
    let (xr, yr) = (x * cos + y * sin, -x * sin + y * cos);

    // return to origin
    (xr + half_w, yr + half_h)
}

/// Applies a centered affine transformation to an image.
///
/// For every output pixel the inverse transform gives a source coordinate,
/// which is resampled with the requested interpolation mode. Output pixels
/// whose sampling footprint leaves the source image are not written, so the
/// background the destination was constructed with shows through.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image with shape (H, W, C), pre-filled with the
///   background color.
/// * `params` - The transform parameters.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// The destination must have the same size as the source.
///
/// # Example
///
/// ```
/// use warpix_image::{Image, ImageSize};
/// use warpix_imgproc::interpolation::InterpolationMode;
/// use warpix_imgproc::warp::{warp_centered, TransformParams};
///
/// let src = Image::<u8, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     128,
/// )
/// .unwrap();
///
/// let mut dst = Image::<u8, 3>::from_size_pixel(src.size(), [0, 0, 0]).unwrap();
///
/// let params = TransformParams {
///     theta: 90.0,
///     ..Default::default()
/// };
///
/// warp_centered(&src, &mut dst, &params, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(dst.size().width, 4);
/// assert_eq!(dst.size().height, 5);
/// ```
pub fn warp_centered<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    params: &TransformParams,
    interpolation: InterpolationMode,
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            dst.rows(),
            dst.cols(),
            src.rows(),
            src.cols(),
        ));
    }

    // find for each output pixel the corresponding position in src
    let (map_x, map_y) = meshgrid_from_fn(dst.cols(), dst.rows(), |x, y| {
        inverse_map(params, src.size(), x as f32, y as f32)
    });

    remap(src, dst, &map_x, &map_y, interpolation)
}
