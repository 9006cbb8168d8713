use serde::Deserialize;
use holonet_core::error::{HolonetError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolonetConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub upstream: UpstreamSection,

    #[serde(default)]
    pub render: RenderSection,

    #[serde(default = "default_debug")]
    pub debug: bool,
}

impl Default for HolonetConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            upstream: UpstreamSection::default(),
            render: RenderSection::default(),
            debug: default_debug(),
        }
    }
}

impl HolonetConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HolonetError::BadConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.upstream.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    /// Overridden by the `PORT` environment variable.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(HolonetError::BadConfig("server.host must not be empty".into()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    /// Every resource path is appended verbatim, so this must end with `/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Skip TLS certificate validation. Off unless asked for.
    #[serde(default)]
    pub accept_invalid_certs: bool,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            accept_invalid_certs: false,
            user_agent: default_user_agent(),
        }
    }
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(HolonetError::BadConfig(
                "upstream.base_url must be an http(s) URL".into(),
            ));
        }
        if !self.base_url.ends_with('/') {
            return Err(HolonetError::BadConfig(
                "upstream.base_url must end with '/'".into(),
            ));
        }
        if !(1..=600_000).contains(&self.timeout_ms) {
            return Err(HolonetError::BadConfig(
                "upstream.timeout_ms must be between 1 and 600000".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    #[serde(default = "default_hide_falsy_fields")]
    pub hide_falsy_fields: bool,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            hide_falsy_fields: default_hide_falsy_fields(),
        }
    }
}

fn default_debug() -> bool {
    true
}
fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    3000
}
fn default_base_url() -> String {
    "https://swapi.dev/api/".into()
}
fn default_timeout_ms() -> u64 {
    5000
}
fn default_user_agent() -> String {
    concat!("holonet/", env!("CARGO_PKG_VERSION")).into()
}
fn default_hide_falsy_fields() -> bool {
    true
}
