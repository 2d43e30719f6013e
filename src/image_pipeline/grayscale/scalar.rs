use ndarray::Array2;

use crate::image_pipeline::grayscale::coefficients::{BGR_LUMA, truncate_to_u8};
use crate::image_pipeline::layout::{BgrImage, BLUE, GREEN, GrayscaleImage, RED};

/// Converts a BGR image to grayscale by visiting every pixel individually.
///
/// This is the reference kernel: each output pixel is
/// `trunc(0.114 * B + 0.587 * G + 0.299 * R)` and no state is carried
/// between pixels. Channels past red are never read.
pub fn convert_to_grayscale_loop(image: &BgrImage) -> GrayscaleImage {
    let (height, width) = (image.height(), image.width());
    let pixels = image.view();
    let mut grayscale = Array2::<u8>::zeros((height, width));

    for i in 0..height {
        for j in 0..width {
            let blue = pixels[[i, j, BLUE]];
            let green = pixels[[i, j, GREEN]];
            let red = pixels[[i, j, RED]];

            grayscale[[i, j]] = truncate_to_u8(BGR_LUMA.weighted_sum(blue, green, red));
        }
    }

    GrayscaleImage::from_array(grayscale)
}
