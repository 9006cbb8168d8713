use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

/// Resource path -> decoded payload. The path is used verbatim, query string
/// included, so `planets/?page=1` and `planets/?page=2` are distinct entries.
///
/// No eviction and no expiry: entries live until the process exits.
#[derive(Default)]
pub struct ResponseCache {
    map: DashMap<String, Arc<Value>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self { map: DashMap::new() }
    }

    pub fn get(&self, path: &str) -> Option<Arc<Value>> {
        self.map.get(path).map(|r| Arc::clone(r.value()))
    }

    /// Last writer wins.
    pub fn put(&self, path: &str, payload: Arc<Value>) {
        self.map.insert(path.to_string(), payload);
    }

    pub fn size(&self) -> usize {
        self.map.len()
    }
}
