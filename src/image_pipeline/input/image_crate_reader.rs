//! Color image reader built on the `image` crate.
//!
//! Any format the `image` crate can guess from the leading bytes (JPEG, PNG,
//! BMP, TIFF, ...) is accepted. The decoder yields RGB(A) samples, which are
//! reordered to BGR(A) before they reach the kernels.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::input::reader::BgrImageReader;
use crate::image_pipeline::layout::BgrImage;

/// Decodes images to three channel BGR, or four channel BGRA when
/// [`ImageCrateReader::with_alpha`] is used and the source has alpha.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateReader {
    keep_alpha: bool,
}

impl ImageCrateReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps an alpha channel as a fourth channel instead of dropping it.
    pub fn with_alpha() -> Self {
        Self { keep_alpha: true }
    }
}

impl BgrImageReader for ImageCrateReader {
    /// Decodes `data` and converts it to BGR order.
    ///
    /// # Errors
    ///
    /// * `ConversionError::ImageDecodeFailed` - the format is unknown or the
    ///   bytes are corrupt
    fn read_bgr(&self, data: &[u8]) -> Result<BgrImage> {
        debug!("Decoding color image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::ImageDecodeFailed(e.to_string()))?;

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;
        let has_alpha = decoded.color().has_alpha();
        debug!(
            "Decoded image: {}x{}, color={:?}",
            width,
            height,
            decoded.color()
        );

        if self.keep_alpha && has_alpha {
            BgrImage::from_rgba_interleaved(height, width, decoded.into_rgba8().into_raw())
        } else {
            BgrImage::from_rgb_interleaved(height, width, decoded.into_rgb8().into_raw())
        }
    }
}
