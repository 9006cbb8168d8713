//! Command-line flags layered over the file config.

use std::path::PathBuf;

use clap::Parser;

use super::schema::HolonetConfig;

#[derive(Debug, Default, Parser)]
#[command(name = "holonet", version, about = "Fetch SWAPI records on demand and report counters")]
pub struct Cli {
    /// Optional YAML config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable debug logging and the per-run stats block.
    #[arg(long = "no-debug")]
    pub no_debug: bool,

    /// Upstream request timeout in milliseconds. Ignored when given without a value.
    #[arg(long, value_name = "MS", num_args = 0..=1)]
    pub timeout: Option<Option<u64>>,

    /// Accept invalid or self-signed upstream TLS certificates.
    #[arg(long = "insecure-tls")]
    pub insecure_tls: bool,
}

impl Cli {
    /// Apply flag overrides; absent flags leave the file config alone.
    pub fn apply(&self, cfg: &mut HolonetConfig) {
        if self.no_debug {
            cfg.debug = false;
        }
        if let Some(Some(ms)) = self.timeout {
            cfg.upstream.timeout_ms = ms;
        }
        if self.insecure_tls {
            cfg.upstream.accept_invalid_certs = true;
        }
    }
}
