//! Output encoding options

/// File format of the grayscale results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Baseline JPEG, 8-bit luma
    Jpeg,
    /// Single strip TIFF, 8-bit gray
    Tiff,
}

impl OutputFormat {
    /// File extension without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Tiff => "tiff",
        }
    }
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression, balanced level
    Deflate,
}

/// Encoder settings shared by every [`GrayscaleWriter`](super::GrayscaleWriter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Only used for [`OutputFormat::Tiff`]
    pub compression: TiffCompression,
    /// Horizontal differencing before compression. Only used for TIFF.
    pub predictor: bool,
    /// 1..=100, only used for [`OutputFormat::Jpeg`]
    pub jpeg_quality: u8,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Jpeg,
            compression: TiffCompression::None,
            predictor: false,
            jpeg_quality: 95,
        }
    }
}
