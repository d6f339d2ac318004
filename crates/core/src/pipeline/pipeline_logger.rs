use std::collections::BTreeMap;
use std::time::Instant;

/// Stage names reported by the placement pipeline.
pub const STAGE_DECODE: &str = "decode";
pub const STAGE_DETECT_FACES: &str = "detect_faces";
pub const STAGE_DETECT_EYES: &str = "detect_eyes";
pub const STAGE_PLACE: &str = "place";

/// Cross-cutting logger for pipeline orchestration events.
///
/// Keeps the use case independent of where timings and counts end up
/// (stdout via `log`, a service's metrics, or nowhere in tests).
pub trait PipelineLogger: Send {
    /// Record how long a named stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a point-in-time metric (e.g. number of faces detected).
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that keeps the last value per stage and metric
/// and reports them through `log::info!` at the end of a run.
pub struct StdoutPipelineLogger {
    timings: BTreeMap<String, f64>,
    metrics: BTreeMap<String, f64>,
    start_time: Instant,
}

impl StdoutPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: BTreeMap::new(),
            metrics: BTreeMap::new(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary string, or `None` if nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!("Placement summary ({elapsed_ms:.1}ms total):")];
        for (stage, ms) in &self.timings {
            lines.push(format!("  {stage:12}: {ms:7.2}ms"));
        }
        for (name, value) in &self.metrics {
            lines.push(format!("  {name}: {value}"));
        }
        Some(lines.join("\n"))
    }

    pub fn timing_for(&self, stage: &str) -> Option<f64> {
        self.timings.get(stage).copied()
    }

    pub fn metric_for(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings.insert(stage.to_string(), duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics.insert(name.to_string(), value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
