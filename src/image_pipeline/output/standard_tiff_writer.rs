use std::io::{Cursor, Write};

use tiff::encoder::colortype::Gray8;
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder};
use tiff::tags::Predictor;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::layout::GrayscaleImage;
use crate::image_pipeline::output::types::{OutputOptions, TiffCompression};
use crate::image_pipeline::output::writer::{GrayscaleWriter, encoder_dimensions};

pub struct StandardTiffWriter;

impl GrayscaleWriter for StandardTiffWriter {
    fn write_gray(
        &self,
        image: &GrayscaleImage,
        output: &mut dyn Write,
        options: &OutputOptions,
    ) -> Result<()> {
        let (width, height) = encoder_dimensions(image, u32::MAX)?;
        debug!("Encoding TIFF image: {}x{}", width, height);

        let compression = match options.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::Deflate => Compression::Deflate(DeflateLevel::Balanced),
        };

        // The encoder needs `Seek`, so encode into memory and copy out.
        let mut buffer = Vec::new();
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if options.predictor {
            encoder = encoder.with_predictor(Predictor::Horizontal);
        }

        encoder
            .write_image::<Gray8>(width, height, &image.pixels())
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
