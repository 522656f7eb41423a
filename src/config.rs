//! Server configuration.
//!
//! Everything here is read once at startup and then shared read-only
//! (`Arc<Config>`) by the listener and every connection worker.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Default listening port when neither the CLI nor the config file sets one.
pub const DEFAULT_PORT: u16 = 8080;
/// Pending connections the kernel queues before `accept`.
pub const DEFAULT_BACKLOG: u32 = 10;
/// Upper bound on the bytes read while looking for the request line.
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 1024;
/// Document root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "data";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub backlog: u32,
    pub max_request_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory every request target is resolved under.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backlog: DEFAULT_BACKLOG,
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
        }
    }
}

impl Config {
    /// Parses a YAML document. Missing sections and fields fall back to defaults.
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("invalid configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
    }

    /// Returns a copy listening on `port` instead of the configured one.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// Returns a copy serving files from `root`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.static_files.root = root.into();
        self
    }

    /// The listener always binds every IPv4 interface.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.server.port))
    }
}
