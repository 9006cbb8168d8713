//! Outbound HTTP to the records API.
//!
//! `HttpUpstream` performs exactly one GET per call: no retries, no redirects
//! beyond reqwest's defaults, no caching. The configured timeout bounds the
//! whole exchange (connect, headers, and body); when it fires the in-flight
//! request future is dropped, which aborts the connection.

use std::time::Duration;

use async_trait::async_trait;
use bytes::BytesMut;
use futures_util::StreamExt;
use serde_json::Value;

use holonet_core::error::{HolonetError, Result};

use crate::config::UpstreamSection;

/// Source of decoded JSON payloads, keyed by API-relative resource path.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value>;
}

pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpUpstream {
    pub fn new(cfg: &UpstreamSection) -> Result<Self> {
        if cfg.accept_invalid_certs {
            tracing::warn!(
                base_url = %cfg.base_url,
                "upstream TLS certificate validation is disabled"
            );
        }
        let client = reqwest::Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .danger_accept_invalid_certs(cfg.accept_invalid_certs)
            .build()
            .map_err(|e| HolonetError::Internal(format!("http client build failed: {e}")))?;

        Ok(Self {
            client,
            base_url: cfg.base_url.clone(),
            timeout: Duration::from_millis(cfg.timeout_ms),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn exchange(&self, path: &str) -> Result<Value> {
        let resp = self
            .client
            .get(self.url_for(path))
            .send()
            .await
            .map_err(|e| transport(path, &e))?;

        // Anything at or above 400 fails, including non-standard codes past 599.
        let status = resp.status();
        if status.as_u16() >= 400 {
            return Err(HolonetError::HttpStatus {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let mut body = BytesMut::new();
        let mut chunks = resp.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            body.extend_from_slice(&chunk.map_err(|e| transport(path, &e))?);
        }

        serde_json::from_slice(&body).map_err(|e| HolonetError::MalformedPayload {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn get_json(&self, path: &str) -> Result<Value> {
        match tokio::time::timeout(self.timeout, self.exchange(path)).await {
            Ok(res) => res,
            Err(_elapsed) => Err(HolonetError::Timeout {
                path: path.to_string(),
            }),
        }
    }
}

fn transport(path: &str, e: &reqwest::Error) -> HolonetError {
    HolonetError::Transport {
        path: path.to_string(),
        reason: e.to_string(),
    }
}
