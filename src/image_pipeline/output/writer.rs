use std::io::Write;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::layout::GrayscaleImage;
use crate::image_pipeline::output::types::OutputOptions;

pub trait GrayscaleWriter {
    fn write_gray(
        &self,
        image: &GrayscaleImage,
        output: &mut dyn Write,
        options: &OutputOptions,
    ) -> Result<()>;
}

/// `(width, height)` as the encoders want them. Neither encoder accepts an
/// empty raster, and `max_side` caps formats with a narrower header field.
pub(super) fn encoder_dimensions(image: &GrayscaleImage, max_side: u32) -> Result<(u32, u32)> {
    let (height, width) = image.dim();
    let invalid = || ConversionError::InvalidDimensions(width, height);

    let w = u32::try_from(width).map_err(|_| invalid())?;
    let h = u32::try_from(height).map_err(|_| invalid())?;
    if w == 0 || h == 0 || w > max_side || h > max_side {
        return Err(invalid());
    }
    Ok((w, h))
}
