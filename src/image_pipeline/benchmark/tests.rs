use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use image::{ImageFormat, Rgb, RgbImage};

use crate::image_pipeline::benchmark::{
    BenchmarkConfig, GrayscaleBenchmark, STEP_DECODE, STEP_ENCODE, STEP_READ_INPUT,
    STEP_VALIDATE, STEP_WRITE,
};
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::grayscale::convert_to_grayscale_loop;
use crate::image_pipeline::input::BgrImageReader;
use crate::image_pipeline::layout::{BgrImage, GrayscaleImage};
use crate::image_pipeline::output::{GrayscaleWriter, OutputFormat, OutputOptions};

struct MockReader {
    should_fail: bool,
    mock_image: Option<(usize, usize, usize, Vec<u8>)>,
}

impl MockReader {
    fn scenario() -> Self {
        #[rustfmt::skip]
        let data = vec![
            0, 0, 0,      255, 255, 255,
            10, 20, 30,   30, 20, 10,
        ];
        Self {
            should_fail: false,
            mock_image: Some((2, 2, 3, data)),
        }
    }
}

impl BgrImageReader for MockReader {
    fn read_bgr(&self, _data: &[u8]) -> Result<BgrImage> {
        if self.should_fail {
            return Err(ConversionError::ImageDecodeFailed("Mock decode error".to_string()));
        }
        match self.mock_image.clone() {
            Some((height, width, channels, data)) => BgrImage::new(height, width, channels, data),
            None => BgrImage::new(100, 100, 3, vec![0u8; 100 * 100 * 3]),
        }
    }
}

struct MockWriter {
    should_fail: bool,
    written: Arc<Mutex<Vec<GrayscaleImage>>>,
}

impl GrayscaleWriter for MockWriter {
    fn write_gray(
        &self,
        image: &GrayscaleImage,
        output: &mut dyn Write,
        _options: &OutputOptions,
    ) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::EncodeError("Mock encode error".to_string()));
        }
        self.written.lock().unwrap().push(image.clone());
        output.write_all(b"mock")?;
        Ok(())
    }
}

fn mock_writer(should_fail: bool) -> (MockWriter, Arc<Mutex<Vec<GrayscaleImage>>>) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let writer = MockWriter {
        should_fail,
        written: written.clone(),
    };
    (writer, written)
}

fn config_in(dir: &Path, format: OutputFormat) -> BenchmarkConfig {
    BenchmarkConfig::builder()
        .input_path(dir.join("sample.png"))
        .loop_output_path(dir.join(format!("loop.{}", format.extension())))
        .vectorized_output_path(dir.join(format!("vectorized.{}", format.extension())))
        .output_format(format)
        .build()
}

fn write_sample_png(path: &Path, width: u32, height: u32) {
    let rgb = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 9 % 256) as u8, (y * 5 % 256) as u8, ((x + y) * 3 % 256) as u8])
    });
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    std::fs::write(path, bytes).unwrap();
}

#[test]
fn test_config_builder() {
    let config = BenchmarkConfig::builder()
        .input_path("in.png")
        .output_format(OutputFormat::Tiff)
        .jpeg_quality(80)
        .validate_dimensions(false)
        .max_dimension(Some(10000))
        .build();

    assert_eq!(config.input_path, Path::new("in.png"));
    assert_eq!(config.loop_output_path, Path::new("grayscale_loop.tiff"));
    assert_eq!(config.vectorized_output_path, Path::new("grayscale_vectorized.tiff"));
    assert_eq!(config.output.format, OutputFormat::Tiff);
    assert_eq!(config.output.jpeg_quality, 80);
    assert!(!config.validate_dimensions);
    assert_eq!(config.max_dimension, Some(10000));
}

#[test]
fn test_default_config() {
    let config = BenchmarkConfig::default();
    assert_eq!(config.input_path, Path::new("images").join("sample.jpg"));
    assert_eq!(config.loop_output_path, Path::new("grayscale_loop.jpg"));
    assert_eq!(config.vectorized_output_path, Path::new("grayscale_vectorized.jpg"));
    assert_eq!(config.output.format, OutputFormat::Jpeg);
    assert!(config.validate_dimensions);
    assert_eq!(config.max_dimension, None);
}

#[test]
fn test_successful_run() {
    let (writer, _) = mock_writer(false);
    let benchmark =
        GrayscaleBenchmark::with_custom(MockReader::scenario(), writer, BenchmarkConfig::default());

    let run = benchmark.run_in_memory(b"fake image data").unwrap();

    assert_eq!(run.loop_image.pixels().as_ref(), &[0, 255, 21, 18]);
    assert_eq!(run.loop_image, run.vectorized_image);
    assert_eq!(run.report.mismatched_pixels, 0);
    assert_eq!(run.report.shape.to_string(), "(2, 2, 3)");

    let timings = &run.report.timings;
    assert_eq!(timings.get_step("grayscale_loop"), Some(run.report.loop_duration));
    assert_eq!(
        timings.get_step("grayscale_vectorized"),
        Some(run.report.vectorized_duration)
    );
    assert!(timings.get_step(STEP_DECODE).is_some());
    assert!(timings.get_step(STEP_VALIDATE).is_some());
}

#[test]
fn test_reader_failure() {
    let (writer, _) = mock_writer(false);
    let reader = MockReader {
        should_fail: true,
        mock_image: None,
    };
    let benchmark = GrayscaleBenchmark::with_custom(reader, writer, BenchmarkConfig::default());

    let result = benchmark.run_in_memory(b"fake image data");
    assert!(matches!(result, Err(ConversionError::ImageDecodeFailed(_))));
}

#[test]
fn test_two_channel_image_is_rejected() {
    let (writer, _) = mock_writer(false);
    let reader = MockReader {
        should_fail: false,
        mock_image: Some((2, 2, 2, vec![0u8; 8])),
    };
    let benchmark = GrayscaleBenchmark::with_custom(reader, writer, BenchmarkConfig::default());

    let result = benchmark.run_in_memory(b"fake image data");
    assert!(matches!(
        result,
        Err(ConversionError::InvalidImageShape { channels: 2, .. })
    ));
}

#[test]
fn test_four_channel_image_matches_three_channel() {
    let (writer, _) = mock_writer(false);
    #[rustfmt::skip]
    let bgra = vec![
        0, 0, 0, 255,      255, 255, 255, 0,
        10, 20, 30, 17,    30, 20, 10, 200,
    ];
    let reader = MockReader {
        should_fail: false,
        mock_image: Some((2, 2, 4, bgra)),
    };
    let benchmark = GrayscaleBenchmark::with_custom(reader, writer, BenchmarkConfig::default());

    let run = benchmark.run_in_memory(b"fake image data").unwrap();
    assert_eq!(run.report.shape.channels, 4);
    assert_eq!(run.vectorized_image.pixels().as_ref(), &[0, 255, 21, 18]);
    assert_eq!(run.loop_image, run.vectorized_image);
}

#[test]
fn test_dimension_validation_failure() {
    let (writer, _) = mock_writer(false);
    let reader = MockReader {
        should_fail: false,
        mock_image: None,
    };
    let config = BenchmarkConfig::builder().max_dimension(Some(50)).build();
    let benchmark = GrayscaleBenchmark::with_custom(reader, writer, config);

    let result = benchmark.run_in_memory(b"fake image data");
    assert!(matches!(result, Err(ConversionError::InvalidDimensions(100, 100))));
}

#[test]
fn test_empty_image_is_rejected_when_validating() {
    let (writer, _) = mock_writer(false);
    let reader = MockReader {
        should_fail: false,
        mock_image: Some((0, 7, 3, Vec::new())),
    };
    let benchmark = GrayscaleBenchmark::with_custom(reader, writer, BenchmarkConfig::default());

    let result = benchmark.run_in_memory(b"fake image data");
    assert!(matches!(result, Err(ConversionError::InvalidDimensions(7, 0))));
}

#[test]
fn test_dimension_validation_disabled() {
    let (writer, _) = mock_writer(false);
    let reader = MockReader {
        should_fail: false,
        mock_image: Some((0, 7, 3, Vec::new())),
    };
    let config = BenchmarkConfig::builder().validate_dimensions(false).build();
    let benchmark = GrayscaleBenchmark::with_custom(reader, writer, config);

    let run = benchmark.run_in_memory(b"fake image data").unwrap();
    assert_eq!(run.loop_image.dim(), (0, 7));
    assert_eq!(run.vectorized_image.dim(), (0, 7));
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), OutputFormat::Jpeg);
    let benchmark = GrayscaleBenchmark::new(config.clone());

    let result = benchmark.run_file();

    match result {
        Err(ConversionError::ImageNotFound(path)) => assert_eq!(path, config.input_path),
        other => panic!("expected ImageNotFound, got {:?}", other.map(|_| ())),
    }
    assert!(!config.loop_output_path.exists());
    assert!(!config.vectorized_output_path.exists());
}

#[test]
fn test_corrupt_input_fails_to_decode() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), OutputFormat::Jpeg);
    std::fs::write(&config.input_path, b"\x89PNG but not really").unwrap();
    let benchmark = GrayscaleBenchmark::new(config.clone());

    let result = benchmark.run_file();

    assert!(matches!(result, Err(ConversionError::ImageDecodeFailed(_))));
    assert!(!config.loop_output_path.exists());
    assert!(!config.vectorized_output_path.exists());
}

#[test]
fn test_writer_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), OutputFormat::Jpeg);
    write_sample_png(&config.input_path, 8, 6);

    let (writer, written) = mock_writer(true);
    let reader = crate::image_pipeline::input::ImageCrateReader::new();
    let benchmark = GrayscaleBenchmark::with_custom(reader, writer, config.clone());

    let result = benchmark.run_file();

    assert!(matches!(result, Err(ConversionError::EncodeError(_))));
    assert!(written.lock().unwrap().is_empty());
    assert!(!config.loop_output_path.exists());
    assert!(!config.vectorized_output_path.exists());
}

#[test]
fn test_run_file_writes_jpeg_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), OutputFormat::Jpeg);
    write_sample_png(&config.input_path, 32, 24);
    let benchmark = GrayscaleBenchmark::new(config.clone());

    let report = benchmark.run_file().unwrap();

    assert_eq!(report.shape.to_string(), "(24, 32, 3)");
    assert_eq!(report.mismatched_pixels, 0);
    for step in [STEP_READ_INPUT, STEP_DECODE, STEP_ENCODE, STEP_WRITE] {
        assert!(report.timings.get_step(step).is_some(), "missing step {}", step);
    }

    for path in [&config.loop_output_path, &config.vectorized_output_path] {
        let decoded = image::open(path).unwrap();
        assert_eq!(decoded.color(), image::ColorType::L8);
        assert_eq!((decoded.width(), decoded.height()), (32, 24));
    }
}

#[test]
fn test_run_file_writes_exact_tiff_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), OutputFormat::Tiff);
    write_sample_png(&config.input_path, 10, 7);
    let benchmark = GrayscaleBenchmark::new(config.clone());

    benchmark.run_file().unwrap();

    let source = crate::image_pipeline::input::ImageCrateReader::new()
        .read_bgr(&std::fs::read(&config.input_path).unwrap())
        .unwrap();
    let expected = convert_to_grayscale_loop(&source);

    for path in [&config.loop_output_path, &config.vectorized_output_path] {
        let decoded = image::open(path).unwrap().into_luma8();
        assert_eq!((decoded.width(), decoded.height()), (10, 7));
        assert_eq!(decoded.into_raw(), expected.pixels().into_owned());
    }
}

#[test]
fn test_writer_receives_both_results() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), OutputFormat::Jpeg);
    write_sample_png(&config.input_path, 4, 4);

    let (writer, written) = mock_writer(false);
    let reader = crate::image_pipeline::input::ImageCrateReader::new();
    let benchmark = GrayscaleBenchmark::with_custom(reader, writer, config.clone());

    benchmark.run_file().unwrap();

    let written = written.lock().unwrap();
    assert_eq!(written.len(), 2);
    assert_eq!(written[0], written[1]);
    assert_eq!(std::fs::read(&config.loop_output_path).unwrap(), b"mock");
}

#[test]
fn test_unreadable_input_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = BenchmarkConfig::builder()
        .input_path(dir.path())
        .loop_output_path(dir.path().join("loop.jpg"))
        .vectorized_output_path(dir.path().join("vectorized.jpg"))
        .build();
    let benchmark = GrayscaleBenchmark::new(config.clone());

    let result = benchmark.run_file();

    assert!(matches!(result, Err(ConversionError::InputReadError(_))));
    assert!(!config.loop_output_path.exists());
    assert!(!config.vectorized_output_path.exists());
}

#[test]
fn test_failed_second_write_removes_first_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = BenchmarkConfig::builder()
        .input_path(dir.path().join("sample.png"))
        .loop_output_path(dir.path().join("loop.jpg"))
        .vectorized_output_path(dir.path().join("missing").join("vectorized.jpg"))
        .build();
    write_sample_png(&config.input_path, 8, 8);
    let benchmark = GrayscaleBenchmark::new(config.clone());

    let result = benchmark.run_file();

    assert!(matches!(result, Err(ConversionError::OutputWriteError(_))));
    assert!(!config.loop_output_path.exists());
    assert!(!config.vectorized_output_path.exists());
}

#[test]
fn test_failed_first_write_leaves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = BenchmarkConfig::builder()
        .input_path(dir.path().join("sample.png"))
        .loop_output_path(dir.path().join("missing").join("loop.jpg"))
        .vectorized_output_path(dir.path().join("vectorized.jpg"))
        .build();
    write_sample_png(&config.input_path, 8, 8);
    let benchmark = GrayscaleBenchmark::new(config.clone());

    let result = benchmark.run_file();

    assert!(matches!(result, Err(ConversionError::OutputWriteError(_))));
    assert!(!config.vectorized_output_path.exists());
}

#[test]
fn test_large_images_pass_default_validation() {
    let (writer, _) = mock_writer(false);
    let reader = MockReader {
        should_fail: false,
        mock_image: Some((1, 60_000, 3, vec![0u8; 60_000 * 3])),
    };
    let benchmark = GrayscaleBenchmark::with_custom(reader, writer, BenchmarkConfig::default());

    let run = benchmark.run_in_memory(b"fake image data").unwrap();
    assert_eq!(run.loop_image.dim(), (1, 60_000));
}
