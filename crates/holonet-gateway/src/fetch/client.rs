use std::sync::Arc;

use serde_json::Value;

use holonet_core::error::Result;

use super::{FetchContext, Upstream};

/// Cache-first fetch over an [`Upstream`].
///
/// Every failed upstream call bumps `ctx.metrics.errors` exactly once; a
/// failure is never cached, so the next call for the same path goes back to
/// the network.
#[derive(Clone)]
pub struct FetchClient {
    upstream: Arc<dyn Upstream>,
}

impl FetchClient {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    pub async fn fetch(&self, ctx: &FetchContext, path: &str) -> Result<Arc<Value>> {
        if let Some(hit) = ctx.cache.get(path) {
            if ctx.debug {
                tracing::debug!(%path, "using cached data");
            }
            return Ok(hit);
        }

        match self.upstream.get_json(path).await {
            Ok(payload) => {
                let payload = Arc::new(payload);
                ctx.cache.put(path, Arc::clone(&payload));
                if ctx.debug {
                    tracing::debug!(%path, cache_size = ctx.cache.size(), "fetched and cached");
                }
                Ok(payload)
            }
            Err(e) => {
                ctx.metrics.errors.inc();
                tracing::warn!(%path, kind = e.kind().as_str(), error = %e, "fetch failed");
                Err(e)
            }
        }
    }
}
