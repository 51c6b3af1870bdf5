//! HTTP server and report storage configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("data/reports")
}

fn default_reports_url_prefix() -> String {
    "/reports".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address, `host:port`.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Directory generated PDF reports are written to.
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,

    /// URL prefix the reports directory is served under.
    #[serde(default = "default_reports_url_prefix")]
    pub reports_url_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            reports_dir: default_reports_dir(),
            reports_url_prefix: default_reports_url_prefix(),
        }
    }
}

impl ServerConfig {
    /// Parse `bind` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `bind` is not a valid `host:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind.parse().map_err(|e| ConfigError::InvalidValue {
            field: "server.bind".into(),
            reason: format!("{e}"),
        })
    }

    /// URL prefix normalized to a leading slash and no trailing slash.
    pub fn normalized_url_prefix(&self) -> String {
        let trimmed = self.reports_url_prefix.trim().trim_matches('/');
        format!("/{trimmed}")
    }
}
