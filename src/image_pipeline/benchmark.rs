//! Benchmark harness module
//!
//! Feeds one decoded image to both grayscale kernels, times each kernel call,
//! persists both results and reports the speed-up.

mod harness;
mod report;
mod timing;
pub mod types;

#[cfg(test)]
mod tests;

pub use harness::{
    BenchmarkRun, GrayscaleBenchmark, STEP_DECODE, STEP_ENCODE, STEP_READ_INPUT, STEP_VALIDATE,
    STEP_WRITE,
};
pub use report::BenchmarkReport;
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{BenchmarkConfig, BenchmarkConfigBuilder, DEFAULT_INPUT_PATH};
