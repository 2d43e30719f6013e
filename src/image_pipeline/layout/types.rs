//! Image buffers shared by the readers, kernels and writers

use std::borrow::Cow;
use std::fmt;

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Zip};

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Channel index of the blue sample within a pixel.
pub const BLUE: usize = 0;
/// Channel index of the green sample within a pixel.
pub const GREEN: usize = 1;
/// Channel index of the red sample within a pixel.
pub const RED: usize = 2;

/// Fewest channels a color image may carry. Anything past [`RED`] is ignored.
pub const MIN_CHANNELS: usize = 3;

/// `(height, width, channels)` of a color image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageShape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl ImageShape {
    fn invalid(self) -> ConversionError {
        ConversionError::InvalidImageShape {
            height: self.height,
            width: self.width,
            channels: self.channels,
        }
    }
}

impl fmt::Display for ImageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.width, self.channels)
    }
}

/// Color image in BGR channel order, read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct BgrImage {
    data: Array3<u8>,
}

impl BgrImage {
    /// Builds an image from interleaved BGR(+extra) bytes, row by row.
    pub fn new(height: usize, width: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let shape = ImageShape {
            height,
            width,
            channels,
        };
        let expected = height
            .checked_mul(width)
            .and_then(|pixels| pixels.checked_mul(channels));
        if channels < MIN_CHANNELS || expected != Some(data.len()) {
            return Err(shape.invalid());
        }

        let data = Array3::from_shape_vec((height, width, channels), data)
            .map_err(|_| shape.invalid())?;
        Ok(Self { data })
    }

    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = data.dim();
        if channels < MIN_CHANNELS {
            return Err(ImageShape {
                height,
                width,
                channels,
            }
            .invalid());
        }
        Ok(Self { data })
    }

    /// Builds an image from interleaved RGB bytes, swapping red and blue.
    pub fn from_rgb_interleaved(height: usize, width: usize, data: Vec<u8>) -> Result<Self> {
        Self::from_interleaved_swapped(height, width, 3, data)
    }

    /// Builds a four channel BGRA image from interleaved RGBA bytes.
    pub fn from_rgba_interleaved(height: usize, width: usize, data: Vec<u8>) -> Result<Self> {
        Self::from_interleaved_swapped(height, width, 4, data)
    }

    fn from_interleaved_swapped(
        height: usize,
        width: usize,
        channels: usize,
        mut data: Vec<u8>,
    ) -> Result<Self> {
        data.chunks_exact_mut(channels)
            .for_each(|pixel| pixel.swap(BLUE, RED));
        Self::new(height, width, channels, data)
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    pub fn shape(&self) -> ImageShape {
        let (height, width, channels) = self.data.dim();
        ImageShape {
            height,
            width,
            channels,
        }
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }
}

/// Single channel 8-bit image with the same height and width as its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleImage {
    data: Array2<u8>,
}

impl GrayscaleImage {
    pub fn from_array(data: Array2<u8>) -> Self {
        Self { data }
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// `(height, width)`
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.data.view()
    }

    /// Row-major pixel bytes, borrowed when the buffer is already contiguous.
    pub fn pixels(&self) -> Cow<'_, [u8]> {
        match self.data.as_slice() {
            Some(bytes) => Cow::Borrowed(bytes),
            None => Cow::Owned(self.data.iter().copied().collect()),
        }
    }

    /// Number of pixels that differ from `other`, or `None` if the shapes differ.
    pub fn count_mismatches(&self, other: &GrayscaleImage) -> Option<usize> {
        if self.dim() != other.dim() {
            return None;
        }
        let mut mismatches = 0;
        Zip::from(&self.data).and(&other.data).for_each(|a, b| {
            if a != b {
                mismatches += 1;
            }
        });
        Some(mismatches)
    }
}
