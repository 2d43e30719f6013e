//! Color image reading module
//!
//! Decodes encoded image bytes into the BGR layout the kernels expect.

mod image_crate_reader;
mod reader;

pub use image_crate_reader::ImageCrateReader;
pub use reader::BgrImageReader;
