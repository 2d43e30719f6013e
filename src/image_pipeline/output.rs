//! Grayscale writing module
//!
//! Encodes kernel results as single channel 8-bit JPEG or TIFF files.

mod format_writer;
mod jpeg_writer;
mod standard_tiff_writer;
pub mod types;
mod writer;

pub use format_writer::FormatWriter;
pub use jpeg_writer::JpegWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{OutputFormat, OutputOptions, TiffCompression};
pub use writer::GrayscaleWriter;
