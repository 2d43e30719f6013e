use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

/// Ordered wall-clock durations of the benchmark steps.
#[derive(Debug, Default, Clone)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    step_map: HashMap<String, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        *self.step_map.entry(name.clone()).or_insert(Duration::ZERO) += duration;
        self.steps.push(StepTiming { name, duration });
    }

    /// Runs `f`, records how long it took under `name` and returns its output.
    pub fn time<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> T {
        let timer = Timer::start(name);
        let output = f();
        let (name, duration) = timer.stop();
        self.add_step(name, duration);
        output
    }

    /// Appends every step of `other` after the steps already recorded.
    pub fn merge(&mut self, other: PipelineTimings) {
        for step in other.steps {
            self.add_step(step.name, step.duration);
        }
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Sum of every step recorded under `name`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.step_map.get(name).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration().as_secs_f64();
        for step in &self.steps {
            let seconds = step.duration.as_secs_f64();
            let percentage = if total > 0.0 { seconds / total * 100.0 } else { 0.0 };
            debug!(
                "{:<24} {:>12.3}ms ({:>5.1}%)",
                step.name,
                seconds * 1000.0,
                percentage
            );
        }
        debug!("{:<24} {:>12.3}ms", "total", total * 1000.0);
    }
}

/// Monotonic stopwatch for a single named step.
pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_steps_accumulate() {
        let mut timings = PipelineTimings::new();
        timings.add_step("decode", Duration::from_millis(5));
        timings.add_step("kernel", Duration::from_millis(7));
        timings.add_step("kernel", Duration::from_millis(3));

        assert_eq!(timings.steps().len(), 3);
        assert_eq!(timings.get_step("kernel"), Some(Duration::from_millis(10)));
        assert_eq!(timings.get_step("missing"), None);
        assert_eq!(timings.total_duration(), Duration::from_millis(15));
    }

    #[test]
    fn test_time_returns_closure_output() {
        let mut timings = PipelineTimings::new();
        let value = timings.time("answer", || 42);

        assert_eq!(value, 42);
        assert_eq!(timings.steps()[0].name, "answer");
        assert!(timings.get_step("answer").is_some());
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut first = PipelineTimings::new();
        first.add_step("read", Duration::from_millis(1));
        let mut second = PipelineTimings::new();
        second.add_step("decode", Duration::from_millis(2));
        second.add_step("write", Duration::from_millis(3));

        first.merge(second);

        let names: Vec<_> = first.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["read", "decode", "write"]);
        assert_eq!(first.total_duration(), Duration::from_millis(6));
    }
}
