use ndarray::{Array1, s};
use tracing::trace;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::grayscale::coefficients::{BGR_LUMA, truncate_to_u8};
use crate::image_pipeline::layout::{BgrImage, GrayscaleImage, MIN_CHANNELS};

/// Converts a BGR image to grayscale with a single matrix-vector product.
///
/// The first three channels of every pixel are lifted to `f64` and laid out
/// as a `(height * width, 3)` matrix, which is multiplied by the
/// `[blue, green, red]` weight vector. The products are summed in channel
/// order, so the result matches [`convert_to_grayscale_loop`] exactly.
///
/// [`convert_to_grayscale_loop`]: super::convert_to_grayscale_loop
pub fn convert_to_grayscale_vectorized(image: &BgrImage) -> Result<GrayscaleImage> {
    let shape = image.shape();
    let (height, width) = (shape.height, shape.width);
    let reshape_failed = |_| ConversionError::InvalidImageShape {
        height: shape.height,
        width: shape.width,
        channels: shape.channels,
    };

    let coefficients = Array1::from(BGR_LUMA.to_array().to_vec());

    let bgr = image
        .view()
        .slice_move(s![.., .., ..MIN_CHANNELS])
        .as_standard_layout()
        .mapv(f64::from);
    let matrix = bgr
        .into_shape((height * width, MIN_CHANNELS))
        .map_err(reshape_failed)?;
    trace!(rows = matrix.nrows(), "Computing weighted dot product");

    let grayscale = matrix
        .dot(&coefficients)
        .mapv(truncate_to_u8)
        .into_shape((height, width))
        .map_err(reshape_failed)?;

    Ok(GrayscaleImage::from_array(grayscale))
}
