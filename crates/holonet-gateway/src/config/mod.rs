//! Config loader (strict parsing).
//!
//! Precedence, lowest first: built-in defaults, optional YAML file, CLI flags,
//! `PORT` environment variable.

pub mod cli;
pub mod schema;

use std::fs;

use holonet_core::error::{HolonetError, Result};

pub use cli::Cli;
pub use schema::{HolonetConfig, RenderSection, ServerSection, UpstreamSection};

/// Environment variable carrying the listen port.
pub const PORT_ENV: &str = "PORT";

pub fn load_from_file(path: &str) -> Result<HolonetConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| HolonetError::BadConfig(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<HolonetConfig> {
    let cfg: HolonetConfig = serde_yaml::from_str(s)
        .map_err(|e| HolonetError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Build the effective config for a process.
pub fn load(cli: &Cli) -> Result<HolonetConfig> {
    let mut cfg = match &cli.config {
        Some(path) => load_from_file(&path.to_string_lossy())?,
        None => HolonetConfig::default(),
    };
    cli.apply(&mut cfg);
    apply_port(&mut cfg, std::env::var(PORT_ENV).ok().as_deref())?;
    cfg.validate()?;
    Ok(cfg)
}

/// Override the listen port from a raw `PORT` value, if any.
pub fn apply_port(cfg: &mut HolonetConfig, raw: Option<&str>) -> Result<()> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(());
    };
    cfg.server.port = raw
        .parse()
        .map_err(|e| {
            HolonetError::BadConfig(format!("{PORT_ENV}={raw} is not a valid port: {e}"))
        })?;
    Ok(())
}
