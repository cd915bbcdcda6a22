//! Parse request metrics.

use std::sync::atomic::{AtomicU64, Ordering};

use metrics::{counter, histogram};
use serde::Serialize;

/// Counts parse requests and their outcomes.
///
/// Values are kept locally for the stats endpoint and also emitted through
/// the `metrics` facade for Prometheus.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    parse_requests: AtomicU64,
    parse_failures: AtomicU64,
    sequences_parsed: AtomicU64,
    points_parsed: AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub parse_requests: u64,
    pub parse_failures: u64,
    pub sequences_parsed: u64,
    pub points_parsed: u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful parse.
    pub fn record_success(&self, sequences: usize, points: usize) {
        self.parse_requests.fetch_add(1, Ordering::Relaxed);
        self.sequences_parsed
            .fetch_add(sequences as u64, Ordering::Relaxed);
        self.points_parsed.fetch_add(points as u64, Ordering::Relaxed);

        counter!("geometry_parse_requests_total").increment(1);
        histogram!("geometry_parse_points").record(points as f64);
    }

    /// Record a rejected input.
    pub fn record_failure(&self) {
        self.parse_requests.fetch_add(1, Ordering::Relaxed);
        self.parse_failures.fetch_add(1, Ordering::Relaxed);

        counter!("geometry_parse_requests_total").increment(1);
        counter!("geometry_parse_failures_total").increment(1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            parse_requests: self.parse_requests.load(Ordering::Relaxed),
            parse_failures: self.parse_failures.load(Ordering::Relaxed),
            sequences_parsed: self.sequences_parsed.load(Ordering::Relaxed),
            points_parsed: self.points_parsed.load(Ordering::Relaxed),
        }
    }
}
