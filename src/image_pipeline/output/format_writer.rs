use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::layout::GrayscaleImage;
use crate::image_pipeline::output::jpeg_writer::JpegWriter;
use crate::image_pipeline::output::standard_tiff_writer::StandardTiffWriter;
use crate::image_pipeline::output::types::{OutputFormat, OutputOptions};
use crate::image_pipeline::output::writer::GrayscaleWriter;

/// Picks the encoder from [`OutputOptions::format`].
pub struct FormatWriter;

impl GrayscaleWriter for FormatWriter {
    fn write_gray(
        &self,
        image: &GrayscaleImage,
        output: &mut dyn Write,
        options: &OutputOptions,
    ) -> Result<()> {
        match options.format {
            OutputFormat::Jpeg => JpegWriter.write_gray(image, output, options),
            OutputFormat::Tiff => StandardTiffWriter.write_gray(image, output, options),
        }
    }
}
