use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use warpix_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads a GIF image from the given file path.
///
/// Only the first frame of an animated GIF is read, converted to RGB8.
///
/// # Arguments
///
/// * `file_path` - The path to the GIF image.
///
/// # Returns
///
/// An image containing the GIF image data.
pub fn read_image_gif(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists and is a GIF
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    if file_path
        .extension()
        .map_or(true, |ext| ext.to_ascii_lowercase() != "gif")
    {
        return Err(IoError::InvalidFileExtension(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

/// Writes the given image to the given file path as a GIF.
///
/// # Arguments
///
/// * `file_path` - The path to the GIF image.
/// * `image` - The image containing the RGB8 pixel data.
pub fn write_image_gif(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let buf = image::RgbImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.as_slice().to_vec(),
    )
    .ok_or_else(|| {
        IoError::GifEncodingError("pixel buffer does not match the image size".to_string())
    })?;

    let mut writer = BufWriter::new(File::create(file_path)?);
    image::DynamicImage::ImageRgb8(buf).write_to(&mut writer, image::ImageFormat::Gif)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::IoError;
    use crate::gif::{read_image_gif, write_image_gif};
    use warpix_image::{Image, ImageSize};

    #[test]
    fn read_missing_file() {
        let res = read_image_gif("missing.gif");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_wrong_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.png");
        std::fs::write(&file_path, [0u8; 4])?;

        let res = read_image_gif(&file_path);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));

        Ok(())
    }

    #[test]
    fn read_write_gif() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.gif");

        let image = Image::<u8, 3>::from_size_pixel(
            ImageSize {
                width: 8,
                height: 4,
            },
            [255, 0, 0],
        )?;
        write_image_gif(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        // the GIF palette may quantize colors, so only the shape is stable
        let image_back = read_image_gif(&file_path)?;
        assert_eq!(image_back.size().width, 8);
        assert_eq!(image_back.size().height, 4);
        assert_eq!(image_back.num_channels(), 3);

        Ok(())
    }
}
