//! Benchmark configuration types

use std::path::PathBuf;

use crate::image_pipeline::output::{OutputFormat, OutputOptions, TiffCompression};

/// Source image read when no other path is configured.
pub const DEFAULT_INPUT_PATH: &str = "images/sample.jpg";
/// File stem of the loop kernel's result.
pub const LOOP_OUTPUT_STEM: &str = "grayscale_loop";
/// File stem of the vectorized kernel's result.
pub const VECTORIZED_OUTPUT_STEM: &str = "grayscale_vectorized";

/// Configuration for a grayscale benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Color image to convert
    pub input_path: PathBuf,
    /// Where the loop kernel's grayscale result is written
    pub loop_output_path: PathBuf,
    /// Where the vectorized kernel's grayscale result is written
    pub vectorized_output_path: PathBuf,
    /// Encoder settings for both results
    pub output: OutputOptions,
    /// Whether to reject empty or oversized images before running the kernels
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating. Unlimited by default.
    pub max_dimension: Option<usize>,
}

fn output_path(stem: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{}.{}", stem, format.extension()))
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        let output = OutputOptions::default();
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            loop_output_path: output_path(LOOP_OUTPUT_STEM, output.format),
            vectorized_output_path: output_path(VECTORIZED_OUTPUT_STEM, output.format),
            output,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl BenchmarkConfig {
    pub fn builder() -> BenchmarkConfigBuilder {
        BenchmarkConfigBuilder::default()
    }
}

/// Builder for BenchmarkConfig
///
/// Output paths left unset follow the chosen format's extension.
#[derive(Default)]
pub struct BenchmarkConfigBuilder {
    input_path: Option<PathBuf>,
    loop_output_path: Option<PathBuf>,
    vectorized_output_path: Option<PathBuf>,
    format: Option<OutputFormat>,
    compression: Option<TiffCompression>,
    predictor: Option<bool>,
    jpeg_quality: Option<u8>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl BenchmarkConfigBuilder {
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    pub fn loop_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.loop_output_path = Some(path.into());
        self
    }

    pub fn vectorized_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vectorized_output_path = Some(path.into());
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, enable: bool) -> Self {
        self.predictor = Some(enable);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> BenchmarkConfig {
        let default = BenchmarkConfig::default();
        let output = OutputOptions {
            format: self.format.unwrap_or(default.output.format),
            compression: self.compression.unwrap_or(default.output.compression),
            predictor: self.predictor.unwrap_or(default.output.predictor),
            jpeg_quality: self.jpeg_quality.unwrap_or(default.output.jpeg_quality),
        };
        BenchmarkConfig {
            input_path: self.input_path.unwrap_or(default.input_path),
            loop_output_path: self
                .loop_output_path
                .unwrap_or_else(|| output_path(LOOP_OUTPUT_STEM, output.format)),
            vectorized_output_path: self
                .vectorized_output_path
                .unwrap_or_else(|| output_path(VECTORIZED_OUTPUT_STEM, output.format)),
            output,
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
