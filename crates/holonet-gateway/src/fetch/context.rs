use crate::obs::FetchMetrics;

use super::ResponseCache;

/// Shared state a fetch reads and mutates. Owned by the orchestrator and lent
/// to the fetch client on each call.
#[derive(Default)]
pub struct FetchContext {
    pub cache: ResponseCache,
    pub metrics: FetchMetrics,
    /// Enables diagnostic logging only; never changes data or counters.
    pub debug: bool,
}

impl FetchContext {
    pub fn new(debug: bool) -> Self {
        Self {
            cache: ResponseCache::new(),
            metrics: FetchMetrics::default(),
            debug,
        }
    }
}
