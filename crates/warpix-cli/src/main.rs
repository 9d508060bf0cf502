use clap::{Parser, ValueEnum};

use warpix::image::Image;
use warpix::imgproc::interpolation::InterpolationMode;
use warpix::imgproc::warp::{warp_centered, ScaleGuard, TransformParams};
use warpix::io::gif as F;

/// Name of the source image expected in the working directory.
const INPUT_PATH: &str = "test.gif";

/// Name of the transformed image written next to the source.
const OUTPUT_PATH: &str = "output.gif";

/// Color of output pixels whose sampling footprint leaves the source image.
const BACKGROUND: [u8; 3] = [0, 0, 0];

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InterpolationArg {
    Bilinear,
    Nearest,
}

impl From<InterpolationArg> for InterpolationMode {
    fn from(arg: InterpolationArg) -> Self {
        match arg {
            InterpolationArg::Bilinear => InterpolationMode::Bilinear,
            InterpolationArg::Nearest => InterpolationMode::Nearest,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScaleGuardArg {
    EitherPositive,
    BothPositive,
}

impl From<ScaleGuardArg> for ScaleGuard {
    fn from(arg: ScaleGuardArg) -> Self {
        match arg {
            ScaleGuardArg::EitherPositive => ScaleGuard::EitherPositive,
            ScaleGuardArg::BothPositive => ScaleGuard::BothPositive,
        }
    }
}

/// Applies a centered scale-shear-rotate-translate transform to `test.gif`
/// and writes the result to `output.gif`.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Horizontal scale factor
    #[arg(allow_negative_numbers = true)]
    x_scale: f32,

    /// Vertical scale factor
    #[arg(allow_negative_numbers = true)]
    y_scale: f32,

    /// Horizontal translation in pixels
    #[arg(allow_negative_numbers = true)]
    x_trans: f32,

    /// Vertical translation in pixels
    #[arg(allow_negative_numbers = true)]
    y_trans: f32,

    /// Rotation angle in degrees
    #[arg(allow_negative_numbers = true)]
    theta: f32,

    /// Shear factor
    #[arg(allow_negative_numbers = true)]
    k_val: f32,

    /// Resampling kernel
    #[arg(long, value_enum, default_value = "bilinear")]
    interpolation: InterpolationArg,

    /// Policy deciding when the inverse scale is applied
    #[arg(long, value_enum, default_value = "either-positive")]
    scale_guard: ScaleGuardArg,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let src: Image<u8, 3> = F::read_image_gif(INPUT_PATH)?;
    log::info!("loaded {INPUT_PATH} ({})", src.size());

    let params = TransformParams {
        x_scale: args.x_scale,
        y_scale: args.y_scale,
        x_trans: args.x_trans,
        y_trans: args.y_trans,
        theta: args.theta,
        shear: args.k_val,
        scale_guard: args.scale_guard.into(),
    };

    let mut dst = Image::from_size_pixel(src.size(), BACKGROUND)?;
    warp_centered(&src, &mut dst, &params, args.interpolation.into())?;

    F::write_image_gif(OUTPUT_PATH, &dst)?;
    log::info!("wrote {OUTPUT_PATH}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn parse_six_positional_args() {
        let args = Args::try_parse_from(["warpix", "1.2", "0.8", "10", "-5.5", "90", "0.3"])
            .expect("six numeric arguments must parse");

        assert_eq!(args.x_scale, 1.2);
        assert_eq!(args.y_scale, 0.8);
        assert_eq!(args.x_trans, 10.0);
        assert_eq!(args.y_trans, -5.5);
        assert_eq!(args.theta, 90.0);
        assert_eq!(args.k_val, 0.3);
    }

    #[test]
    fn reject_missing_args() {
        assert!(Args::try_parse_from(["warpix", "1", "1", "0", "0", "45"]).is_err());
    }

    #[test]
    fn reject_non_numeric_args() {
        assert!(Args::try_parse_from(["warpix", "1", "1", "0", "zero", "45", "0"]).is_err());
    }
}
