//! Channel layout contract
//!
//! Both grayscale kernels read a `(height, width, channels)` byte array in
//! Blue-Green-Red order and produce a `(height, width)` byte array.

pub mod types;


pub use types::{BgrImage, GrayscaleImage, ImageShape, BLUE, GREEN, MIN_CHANNELS, RED};
