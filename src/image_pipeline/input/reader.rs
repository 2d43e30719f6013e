use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::layout::BgrImage;

pub trait BgrImageReader {
    fn read_bgr(&self, data: &[u8]) -> Result<BgrImage>;
}
