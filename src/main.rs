use anyhow::Context;
use grayscale_showcase_rs::image_pipeline::{BenchmarkConfig, ConversionError, GrayscaleBenchmark};
use grayscale_showcase_rs::logger;

use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    let config = BenchmarkConfig::default();
    let benchmark = GrayscaleBenchmark::new(config);

    info!(
        input = %benchmark.config().input_path.display(),
        format = ?benchmark.config().output.format,
        "Grayscale benchmark initialized"
    );

    let report = benchmark
        .run_file()
        .inspect_err(|e| {
            if let ConversionError::ImageNotFound(_) = e {
                eprintln!(
                    "Please make sure you have an 'images' folder with a 'sample.jpg' file inside."
                );
            }
        })
        .context("grayscale benchmark did not complete")?;

    report.print_summary();
    Ok(())
}
