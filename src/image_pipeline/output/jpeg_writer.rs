use std::io::Write;

use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::layout::GrayscaleImage;
use crate::image_pipeline::output::types::OutputOptions;
use crate::image_pipeline::output::writer::{GrayscaleWriter, encoder_dimensions};

/// JPEG stores its dimensions in 16-bit header fields.
const MAX_JPEG_SIDE: u32 = u16::MAX as u32;

pub struct JpegWriter;

impl GrayscaleWriter for JpegWriter {
    fn write_gray(
        &self,
        image: &GrayscaleImage,
        output: &mut dyn Write,
        options: &OutputOptions,
    ) -> Result<()> {
        let (width, height) = encoder_dimensions(image, MAX_JPEG_SIDE)?;
        let quality = options.jpeg_quality.clamp(1, 100);
        debug!("Encoding JPEG image: {}x{}, quality={}", width, height, quality);

        let mut buffer = Vec::new();
        JpegEncoder::new_with_quality(&mut buffer, quality)
            .encode(&image.pixels(), width, height, ExtendedColorType::L8)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("JPEG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
