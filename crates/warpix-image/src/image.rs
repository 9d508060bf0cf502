use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use warpix_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for image data types.
///
/// Send and Sync is required for the row-parallel resampling loops.
pub trait ImageDtype: Copy + Default + Into<f32> + Send + Sync {
    /// Convert a f32 value to the image data type.
    fn from_f32(x: f32) -> Self;
}

impl ImageDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl ImageDtype for u8 {
    /// Channel rounding rule: round to nearest, then clamp to `[0, 255]`.
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

/// Represents an image with pixel data.
///
/// The pixel data is stored row-major with interleaved channels, i.e. with
/// shape (H, W, C) where H is the height of the image, W the width and C the
/// number of channels.
#[derive(Clone, Debug)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use warpix_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and a uniform value in every channel.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Create a new image with the given size, filled with a background pixel.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `pixel` - The background color replicated into every pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use warpix_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_pixel(
    ///     ImageSize {
    ///         width: 2,
    ///         height: 2,
    ///     },
    ///     [255, 0, 0],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.get_pixel(1, 1), Ok([255, 0, 0]));
    /// ```
    pub fn from_size_pixel(size: ImageSize, pixel: [T; CHANNELS]) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(size.width * size.height * CHANNELS);
        for _ in 0..size.width * size.height {
            data.extend_from_slice(&pixel);
        }
        Image::new(size, data)
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// # Errors
    ///
    /// If a pixel value cannot be represented in the target type, an error is returned.
    pub fn cast<U>(&self) -> Result<Image<U, CHANNELS>, ImageError>
    where
        U: num_traits::NumCast,
        T: num_traits::NumCast + Copy,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, casted_data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice with shape (H, W, C).
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable flat slice with shape (H, W, C).
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the underlying pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the pixel at the given coordinates.
    ///
    /// # Arguments
    ///
    /// * `row` - The row of the pixel, in `[0, rows)`.
    /// * `col` - The column of the pixel, in `[0, cols)`.
    ///
    /// # Errors
    ///
    /// If the coordinate lies outside the image, an error is returned.
    pub fn get_pixel(&self, row: usize, col: usize) -> Result<[T; CHANNELS], ImageError>
    where
        T: Copy,
    {
        if row >= self.height() || col >= self.width() {
            return Err(ImageError::PixelIndexOutOfBounds(
                row,
                col,
                self.height(),
                self.width(),
            ));
        }

        let base = (row * self.width() + col) * CHANNELS;
        Ok(std::array::from_fn(|c| self.data[base + c]))
    }

    /// Set the pixel at the given coordinates.
    ///
    /// # Arguments
    ///
    /// * `row` - The row of the pixel, in `[0, rows)`.
    /// * `col` - The column of the pixel, in `[0, cols)`.
    /// * `pixel` - The channel values to write.
    ///
    /// # Errors
    ///
    /// If the coordinate lies outside the image, an error is returned.
    pub fn set_pixel(
        &mut self,
        row: usize,
        col: usize,
        pixel: [T; CHANNELS],
    ) -> Result<(), ImageError>
    where
        T: Copy,
    {
        if row >= self.height() || col >= self.width() {
            return Err(ImageError::PixelIndexOutOfBounds(
                row,
                col,
                self.height(),
                self.width(),
            ));
        }

        let base = (row * self.width() + col) * CHANNELS;
        self.data[base..base + CHANNELS].copy_from_slice(&pixel);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageDtype, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_data_mismatch() {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 11],
        );
        assert_eq!(image.err(), Some(ImageError::InvalidChannelShape(11, 12)));
    }

    #[test]
    fn image_from_size_pixel() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_pixel(
            ImageSize {
                width: 3,
                height: 2,
            },
            [1, 2, 3],
        )?;
        assert_eq!(image.get_pixel(0, 0)?, [1, 2, 3]);
        assert_eq!(image.get_pixel(1, 2)?, [1, 2, 3]);

        Ok(())
    }

    #[test]
    fn image_get_set_pixel() -> Result<(), ImageError> {
        let mut image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 3,
            },
            0,
        )?;

        image.set_pixel(2, 1, [7, 8, 9])?;
        assert_eq!(image.get_pixel(2, 1)?, [7, 8, 9]);
        assert_eq!(image.get_pixel(0, 0)?, [0, 0, 0]);

        assert_eq!(
            image.get_pixel(3, 0).err(),
            Some(ImageError::PixelIndexOutOfBounds(3, 0, 3, 2))
        );
        assert_eq!(
            image.set_pixel(0, 2, [0, 0, 0]).err(),
            Some(ImageError::PixelIndexOutOfBounds(0, 2, 3, 2))
        );

        Ok(())
    }

    #[test]
    fn image_cast() -> Result<(), ImageError> {
        let data = vec![0u8, 1, 2, 3, 4, 5];
        let image_u8 = Image::<_, 3>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            data,
        )?;

        let image_f32: Image<f32, 3> = image_u8.cast()?;
        assert_eq!(image_f32.get_pixel(1, 0)?, [3.0, 4.0, 5.0]);

        Ok(())
    }

    #[test]
    fn dtype_from_f32_rounds_and_clamps() {
        assert_eq!(u8::from_f32(127.4), 127);
        assert_eq!(u8::from_f32(127.5), 128);
        assert_eq!(u8::from_f32(-3.0), 0);
        assert_eq!(u8::from_f32(300.0), 255);
        assert_eq!(f32::from_f32(0.25), 0.25);
    }
}
