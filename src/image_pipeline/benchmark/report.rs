use std::fmt::Write as _;
use std::time::Duration;

use crate::image_pipeline::benchmark::timing::PipelineTimings;
use crate::image_pipeline::layout::ImageShape;

/// Outcome of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Shape of the decoded source image
    pub shape: ImageShape,
    /// Time spent inside the loop kernel only
    pub loop_duration: Duration,
    /// Time spent inside the vectorized kernel only
    pub vectorized_duration: Duration,
    /// Pixels on which the two kernels disagree. Always zero for a correct build.
    pub mismatched_pixels: usize,
    /// Every recorded step, I/O included
    pub timings: PipelineTimings,
}

impl BenchmarkReport {
    /// Loop time divided by vectorized time, or `None` when the vectorized
    /// kernel finished too fast for the clock to register.
    pub fn speedup(&self) -> Option<f64> {
        let vectorized = self.vectorized_duration.as_secs_f64();
        if vectorized > 0.0 {
            Some(self.loop_duration.as_secs_f64() / vectorized)
        } else {
            None
        }
    }

    /// Console summary in the order the steps ran.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Processing a {} image...\n", self.shape);
        let _ = writeln!(out, "[Slow Method] Using For-Loops:");
        let _ = writeln!(
            out,
            "Time taken: {:.4} seconds.",
            self.loop_duration.as_secs_f64()
        );
        let _ = writeln!(out, "\n[Fast Method] Using Vectorization:");
        let _ = writeln!(
            out,
            "Time taken: {:.4} seconds.",
            self.vectorized_duration.as_secs_f64()
        );
        if let Some(speedup) = self.speedup() {
            let _ = writeln!(out, "\nVectorization was ~{:.1} times faster!", speedup);
        }
        out
    }

    pub fn print_summary(&self) {
        print!("{}", self.render());
    }
}
