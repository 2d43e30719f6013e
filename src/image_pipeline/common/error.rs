use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Image not found at path '{}'", .0.display())]
    ImageNotFound(PathBuf),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    ImageDecodeFailed(String),

    #[error("Invalid image shape ({height}, {width}, {channels}): expected at least 3 channels and a matching buffer")]
    InvalidImageShape {
        height: usize,
        width: usize,
        channels: usize,
    },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to encode grayscale image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
