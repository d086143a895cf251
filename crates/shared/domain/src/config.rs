use crate::constants::{ALPINE_CDN, ALPINE_MASK_CDN, TAILWIND_CDN};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of the demo application.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfigInner {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    pub log: LogConfig,
}

/// Arc-wrapped config, cheap to clone into request handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct DemoConfig {
    #[serde(flatten, default)]
    inner: Arc<DemoConfigInner>,
}

impl Deref for DemoConfig {
    type Target = DemoConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for DemoConfig {
    fn deref_mut(&mut self) -> &mut DemoConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Script sources injected into the page head.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub alpine: String,
    pub alpine_mask: String,
    pub tailwind: Option<String>,
}

/// Logger outputs and verbosity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level for targets not matched by `filter` or `RUST_LOG`.
    pub level: String,
    /// Filter directives such as `ridge=debug,tower_http=info`; overrides `RUST_LOG`.
    pub filter: Option<String>,
    pub console: bool,
    /// Directory for daily log files; no file output when unset.
    pub path: Option<PathBuf>,
    /// Write file records as JSON lines.
    pub json: bool,
    pub max_files: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 3000, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            alpine: ALPINE_CDN.to_owned(),
            alpine_mask: ALPINE_MASK_CDN.to_owned(),
            tailwind: Some(TAILWIND_CDN.to_owned()),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            path: None,
            json: false,
            max_files: 10,
        }
    }
}
