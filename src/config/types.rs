use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::api::params::{DEFAULT_FILTER, DEFAULT_PAGE_SIZE, DEFAULT_SITE};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Stack Exchange endpoint and request defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API host (e.g., "https://api.stackexchange.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Stack Exchange site parameter (e.g., "stackoverflow", "superuser").
    #[serde(default = "default_site")]
    pub site: String,
    /// Response filter; "withbody" includes post bodies.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Items per list request (1..=100).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Pre-flight network check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityConfig {
    /// When false the client assumes it is online.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Address whose route is checked (host:port, IP literal).
    #[serde(default = "default_probe_addr")]
    pub probe_addr: String,
}

/// Log output. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; defaults to `<data dir>/stackbrowse/stackbrowse.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://api.stackexchange.com".to_string()
}

fn default_site() -> String {
    DEFAULT_SITE.to_string()
}

fn default_filter() -> String {
    DEFAULT_FILTER.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_probe_addr() -> String {
    "1.1.1.1:53".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site: default_site(),
            filter: default_filter(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            probe_addr: default_probe_addr(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Configured file, or the per-user default location.
    pub fn resolved_file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join("stackbrowse").join("stackbrowse.log"))
        })
    }
}
