use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::grayscale::{convert_to_grayscale_loop, convert_to_grayscale_vectorized};
use crate::image_pipeline::layout::{BgrImage, GrayscaleImage};

pub trait GrayscaleConverter {
    /// Short label used for timing steps and log fields.
    fn name(&self) -> &'static str;

    fn convert(&self, image: &BgrImage) -> Result<GrayscaleImage>;
}

/// Pixel-at-a-time reference kernel.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoopConverter;

impl GrayscaleConverter for LoopConverter {
    fn name(&self) -> &'static str {
        "grayscale_loop"
    }

    fn convert(&self, image: &BgrImage) -> Result<GrayscaleImage> {
        Ok(convert_to_grayscale_loop(image))
    }
}

/// Whole-array dot product kernel.
#[derive(Debug, Default, Clone, Copy)]
pub struct VectorizedConverter;

impl GrayscaleConverter for VectorizedConverter {
    fn name(&self) -> &'static str {
        "grayscale_vectorized"
    }

    fn convert(&self, image: &BgrImage) -> Result<GrayscaleImage> {
        convert_to_grayscale_vectorized(image)
    }
}
