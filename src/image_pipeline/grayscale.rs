//! Grayscale conversion kernels
//!
//! Two implementations of the same luminosity formula: a pixel-at-a-time loop
//! and a whole-array dot product. Both truncate toward zero and must agree on
//! every pixel.

mod batch;
mod coefficients;
mod converter;
mod scalar;


pub use batch::convert_to_grayscale_vectorized;
pub use coefficients::{BGR_LUMA, Coefficients};
pub use converter::{GrayscaleConverter, LoopConverter, VectorizedConverter};
pub use scalar::convert_to_grayscale_loop;
