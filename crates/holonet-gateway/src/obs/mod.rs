//! Lightweight in-process counters.
//!
//! Counters are plain atomics shared through `FetchContext`; they are read by
//! the `/stats` route, the HTML footer, and the debug stats block.

pub mod metrics;

pub use metrics::{Counter, FetchMetrics, MetricsSnapshot};
