use std::path::Path;
use std::time::Duration;

use tracing::{debug, info, info_span, instrument, warn};

use crate::image_pipeline::{
    BgrImage, ConversionError, GrayscaleImage, Result,
    benchmark::{BenchmarkConfig, BenchmarkReport, PipelineTimings, Timer},
    grayscale::{GrayscaleConverter, LoopConverter, VectorizedConverter},
    input::{BgrImageReader, ImageCrateReader},
    output::{FormatWriter, GrayscaleWriter},
};

pub const STEP_READ_INPUT: &str = "read_input_file";
pub const STEP_DECODE: &str = "decode_image";
pub const STEP_VALIDATE: &str = "validate_dimensions";
pub const STEP_ENCODE: &str = "encode_outputs";
pub const STEP_WRITE: &str = "write_outputs";

/// Both kernel results of a run together with its report.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub loop_image: GrayscaleImage,
    pub vectorized_image: GrayscaleImage,
    pub report: BenchmarkReport,
}

/// Runs the loop and vectorized kernels on one image and times each.
///
/// Kernels run one after the other on the same read-only image. Only the
/// kernel call itself is inside its timer; decoding, encoding and file I/O
/// are recorded as separate steps.
pub struct GrayscaleBenchmark<R: BgrImageReader, W: GrayscaleWriter> {
    reader: R,
    writer: W,
    config: BenchmarkConfig,
}

impl GrayscaleBenchmark<ImageCrateReader, FormatWriter> {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            reader: ImageCrateReader::new(),
            writer: FormatWriter,
            config,
        }
    }
}

impl<R: BgrImageReader, W: GrayscaleWriter> GrayscaleBenchmark<R, W> {
    pub fn with_custom(reader: R, writer: W, config: BenchmarkConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, image: &BgrImage) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes `input_data` and runs both kernels without touching the file system.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn run_in_memory(&self, input_data: &[u8]) -> Result<BenchmarkRun> {
        let mut timings = PipelineTimings::new();

        let image = timings.time(STEP_DECODE, || self.reader.read_bgr(input_data))?;
        let shape = image.shape();
        info!(%shape, "Processing image");

        timings.time(STEP_VALIDATE, || self.validate_dimensions(&image))?;

        let (loop_image, loop_duration) = run_kernel(&LoopConverter, &image)?;
        timings.add_step(LoopConverter.name(), loop_duration);

        let (vectorized_image, vectorized_duration) = run_kernel(&VectorizedConverter, &image)?;
        timings.add_step(VectorizedConverter.name(), vectorized_duration);

        let mismatched_pixels = loop_image
            .count_mismatches(&vectorized_image)
            .unwrap_or(shape.height * shape.width);
        if mismatched_pixels > 0 {
            warn!(mismatched_pixels, "Loop and vectorized kernels disagree");
        }

        Ok(BenchmarkRun {
            loop_image,
            vectorized_image,
            report: BenchmarkReport {
                shape,
                loop_duration,
                vectorized_duration,
                mismatched_pixels,
                timings,
            },
        })
    }

    /// Reads the configured input, runs both kernels and writes both results.
    ///
    /// Nothing is written unless both kernels succeed and both results encode.
    #[instrument(skip(self), fields(input = %self.config.input_path.display()))]
    pub fn run_file(&self) -> Result<BenchmarkReport> {
        let input_path = self.config.input_path.as_path();
        let mut timings = PipelineTimings::new();

        if !input_path.exists() {
            return Err(ConversionError::ImageNotFound(input_path.to_path_buf()));
        }

        let input_data = timings.time(STEP_READ_INPUT, || {
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })
        })?;

        let run = self.run_in_memory(&input_data)?;

        let (loop_bytes, vectorized_bytes) = timings.time(STEP_ENCODE, || {
            Ok::<_, ConversionError>((
                self.encode(&run.loop_image)?,
                self.encode(&run.vectorized_image)?,
            ))
        })?;

        timings.time(STEP_WRITE, || {
            write_outputs(&[
                (self.config.loop_output_path.as_path(), loop_bytes.as_slice()),
                (
                    self.config.vectorized_output_path.as_path(),
                    vectorized_bytes.as_slice(),
                ),
            ])
        })?;

        let mut report = run.report;
        timings.merge(report.timings);
        report.timings = timings;
        report.timings.log_summary();

        info!(
            loop_output = %self.config.loop_output_path.display(),
            vectorized_output = %self.config.vectorized_output_path.display(),
            "Benchmark complete"
        );
        Ok(report)
    }

    fn encode(&self, image: &GrayscaleImage) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.writer
            .write_gray(image, &mut buffer, &self.config.output)?;
        Ok(buffer)
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }
}

fn run_kernel(
    converter: &dyn GrayscaleConverter,
    image: &BgrImage,
) -> Result<(GrayscaleImage, Duration)> {
    let _span = info_span!("kernel", name = converter.name()).entered();

    let timer = Timer::start(converter.name());
    let grayscale = converter.convert(image)?;
    let (name, duration) = timer.stop();

    info!("{}: {:.4}s", name, duration.as_secs_f64());
    Ok((grayscale, duration))
}

/// Writes every output or none: on the first failure, files written so far
/// (and the failed one, if it was created) are removed again.
fn write_outputs(outputs: &[(&Path, &[u8])]) -> Result<()> {
    for (written, (path, bytes)) in outputs.iter().enumerate() {
        debug!("Writing {} bytes to {}", bytes.len(), path.display());
        if let Err(e) = std::fs::write(path, bytes) {
            for (stale, _) in &outputs[..=written] {
                if std::fs::remove_file(stale).is_ok() {
                    warn!("Removed partial output {}", stale.display());
                }
            }
            return Err(ConversionError::OutputWriteError(format!(
                "{}: {}",
                path.display(),
                e
            )));
        }
    }
    Ok(())
}
