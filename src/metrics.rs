//! Translation metrics for the HTTP service.
//!
//! Counters live in the server state, not in the engine, so the engine itself
//! stays free of shared mutable state.

use crate::assembler::TranslationResponse;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Request and segment counters.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of translate requests answered successfully
    requests: AtomicUsize,

    /// Number of requests rejected at the boundary (blank input)
    rejected: AtomicUsize,

    /// Number of segments produced across all requests
    segments: AtomicUsize,

    /// Number of segments that fell back to `[hypothetical]`
    hypothetical: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful translation.
    pub fn record_translation(&self, response: &TranslationResponse) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.segments
            .fetch_add(response.morphology.len(), Ordering::Relaxed);
        self.hypothetical
            .fetch_add(response.hypothetical_count(), Ordering::Relaxed);
    }

    /// Record a request rejected before reaching the engine.
    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> usize {
        self.rejected.load(Ordering::Relaxed)
    }

    pub fn segments(&self) -> usize {
        self.segments.load(Ordering::Relaxed)
    }

    pub fn hypothetical(&self) -> usize {
        self.hypothetical.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let segments = self.segments();
        let hypothetical = self.hypothetical();
        let hypothetical_rate = if segments > 0 {
            (hypothetical as f64 / segments as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            requests: self.requests(),
            rejected: self.rejected(),
            segments,
            hypothetical,
            hypothetical_rate,
        }
    }
}

/// Point-in-time snapshot of the counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub requests: usize,
    pub rejected: usize,
    pub segments: usize,
    pub hypothetical: usize,

    /// Percentage of segments that were hypothetical
    pub hypothetical_rate: f64,
}

impl MetricsReport {
    /// Format the report as a human-readable string.
    pub fn format(&self) -> String {
        format!(
            "Translation Metrics:\n\
             - Requests: {} ({} rejected)\n\
             - Segments: {}\n\
             - Hypothetical: {} ({:.1}%)",
            self.requests, self.rejected, self.segments, self.hypothetical, self.hypothetical_rate
        )
    }
}
