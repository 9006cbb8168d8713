//! Process-wide fetch counters.
//!
//! All updates are single atomic operations (`Relaxed`), so overlapping runs
//! simply accumulate. Nothing here is ever reset.

use serde::Serialize;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// First numbered resource a fresh process fetches.
pub const FIRST_ID: u64 = 1;

#[derive(Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.add(1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, v: u64) {
        self.value.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

pub struct FetchMetrics {
    /// Orchestrator runs started.
    pub requests: Counter,
    /// Fetch failures plus aborted runs.
    pub errors: Counter,
    /// Serialized payload bytes consumed by runs, cache hits included.
    pub bytes: Counter,
    last_id: AtomicU64,
}

impl Default for FetchMetrics {
    fn default() -> Self {
        Self {
            requests: Counter::default(),
            errors: Counter::default(),
            bytes: Counter::default(),
            last_id: AtomicU64::new(FIRST_ID),
        }
    }
}

/// Point-in-time copy of the counters plus the knobs they were produced under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub errors: u64,
    pub bytes: u64,
    pub debug: bool,
    pub timeout_ms: u64,
}

impl FetchMetrics {
    /// Identifier of the next numbered resource to fetch.
    pub fn last_id(&self) -> u64 {
        self.last_id.load(Ordering::Relaxed)
    }

    /// Move to the next identifier; returns the new value.
    pub fn advance_last_id(&self) -> u64 {
        self.last_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn snapshot(&self, debug: bool, timeout_ms: u64) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.get(),
            errors: self.errors.get(),
            bytes: self.bytes.get(),
            debug,
            timeout_ms,
        }
    }

    /// Human-readable stats block appended to a run's output in debug mode.
    pub fn render(&self, cache_size: usize, out: &mut String) {
        let _ = writeln!(out, "\nStats:");
        let _ = writeln!(out, "API Calls: {}", self.requests.get());
        let _ = writeln!(out, "Cache Size: {}", cache_size);
        let _ = writeln!(out, "Total Data Size: {} bytes", self.bytes.get());
        let _ = writeln!(out, "Error Count: {}", self.errors.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let m = FetchMetrics::default();
        m.requests.inc();
        m.bytes.add(120);
        m.bytes.add(30);
        m.errors.inc();
        m.errors.inc();
        let s = m.snapshot(true, 5000);
        assert_eq!(
            s,
            MetricsSnapshot { requests: 1, errors: 2, bytes: 150, debug: true, timeout_ms: 5000 }
        );
    }

    #[test]
    fn last_id_starts_at_one_and_advances() {
        let m = FetchMetrics::default();
        assert_eq!(m.last_id(), 1);
        assert_eq!(m.advance_last_id(), 2);
        assert_eq!(m.last_id(), 2);
    }

    #[test]
    fn stats_block() {
        let m = FetchMetrics::default();
        m.requests.inc();
        m.bytes.add(42);
        let mut out = String::new();
        m.render(3, &mut out);
        assert_eq!(out, "\nStats:\nAPI Calls: 1\nCache Size: 3\nTotal Data Size: 42 bytes\nError Count: 0\n");
    }
}
