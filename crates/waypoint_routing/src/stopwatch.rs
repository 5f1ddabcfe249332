use std::time::{Duration, Instant};

use tracing::debug;

/// Measures one search and reports it through `tracing`.
pub struct Stopwatch {
    label: &'static str,
    started_at: Instant,
}

impl Stopwatch {
    pub fn new(label: &'static str) -> Self {
        Stopwatch {
            label,
            started_at: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn report(&self, iterations: usize) {
        debug!(
            label = self.label,
            iterations,
            elapsed_us = self.elapsed().as_micros() as u64,
            "Stopwatch"
        );
    }
}
