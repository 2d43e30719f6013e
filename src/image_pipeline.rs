//! Grayscale conversion pipeline
//!
//! Decoding into the BGR layout, the two grayscale kernels, grayscale
//! encoding and the benchmark harness that ties them together.

pub mod benchmark;
pub mod common;
pub mod grayscale;
pub mod input;
pub mod layout;
pub mod output;

pub use common::{
    ConversionError,
    Result,
};

pub use layout::{
    BgrImage,
    GrayscaleImage,
    ImageShape,
};

pub use grayscale::{
    BGR_LUMA,
    Coefficients,
    GrayscaleConverter,
    LoopConverter,
    VectorizedConverter,
    convert_to_grayscale_loop,
    convert_to_grayscale_vectorized,
};

pub use input::{
    BgrImageReader,
    ImageCrateReader,
};

pub use output::{
    FormatWriter,
    GrayscaleWriter,
    JpegWriter,
    OutputFormat,
    OutputOptions,
    StandardTiffWriter,
    TiffCompression,
};

pub use benchmark::{
    BenchmarkConfig,
    BenchmarkConfigBuilder,
    BenchmarkReport,
    BenchmarkRun,
    GrayscaleBenchmark,
    PipelineTimings,
};
