//! Shared application state for the Holonet server.
//!
//! Owns the effective config and the single orchestrator (and through it the
//! fetch context). Cloning is cheap: everything lives behind one `Arc`.

use std::sync::Arc;

use serde::Serialize;

use holonet_core::error::Result;
use holonet_core::render::RenderOptions;

use crate::config::HolonetConfig;
use crate::fetch::{FetchClient, FetchContext, HttpUpstream, Upstream};
use crate::orchestrator::Orchestrator;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: HolonetConfig,
    orchestrator: Orchestrator,
}

/// Body of `GET /stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsBody {
    pub api_calls: u64,
    pub cache_size: usize,
    pub data_size: u64,
    pub errors: u64,
    pub debug: bool,
    pub timeout: u64,
}

impl AppState {
    /// Build application state with the real HTTP upstream.
    /// Returns Result so main can report a bad TLS/client setup instead of panicking.
    pub fn new(cfg: HolonetConfig) -> Result<Self> {
        let upstream = HttpUpstream::new(&cfg.upstream)?;
        Ok(Self::with_upstream(cfg, Arc::new(upstream)))
    }

    pub fn with_upstream(cfg: HolonetConfig, upstream: Arc<dyn Upstream>) -> Self {
        let ctx = Arc::new(FetchContext::new(cfg.debug));
        let render = RenderOptions {
            hide_falsy: cfg.render.hide_falsy_fields,
        };
        let orchestrator = Orchestrator::new(FetchClient::new(upstream), ctx, render);

        Self {
            inner: Arc::new(AppStateInner { cfg, orchestrator }),
        }
    }

    pub fn cfg(&self) -> &HolonetConfig {
        &self.inner.cfg
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.inner.orchestrator
    }

    pub fn stats(&self) -> StatsBody {
        let ctx = self.inner.orchestrator.context();
        let snap = ctx.metrics.snapshot(self.inner.cfg.debug, self.inner.cfg.upstream.timeout_ms);
        StatsBody {
            api_calls: snap.requests,
            cache_size: ctx.cache.size(),
            data_size: snap.bytes,
            errors: snap.errors,
            debug: snap.debug,
            timeout: snap.timeout_ms,
        }
    }

    /// Start one run as a detached task and return immediately.
    ///
    /// The caller gets no handle: output goes to the console when the run
    /// finishes, and overlapping runs are not serialized.
    pub fn trigger_run(&self) {
        let state = self.clone();
        tokio::spawn(async move {
            let report = state.orchestrator().run().await;
            report.emit();
        });
    }
}
