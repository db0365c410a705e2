// src/config.rs
//! Server configuration: compiled-in defaults, then environment overrides.

use anyhow::{Context, Result};
use std::net::IpAddr;
use tracing::info;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8787;

pub const HOST_VAR: &str = "EMOTE_BRIDGE_HOST";
pub const PORT_VAR: &str = "EMOTE_BRIDGE_PORT";
pub const LOG_JSON_VAR: &str = "EMOTE_BRIDGE_LOG_JSON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            log_json: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host
                .trim()
                .parse()
                .with_context(|| format!("{} must be an IP address, got '{}'", HOST_VAR, host))?;
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("{} must be a valid port number, got '{}'", PORT_VAR, port))?;
        }

        if let Some(flag) = lookup(LOG_JSON_VAR) {
            config.log_json = parse_flag(&flag);
        }

        Ok(config)
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_log_json(mut self, log_json: bool) -> Self {
        self.log_json = log_json;
        self
    }

    pub fn log_summary(&self) {
        info!("Server: http://{}:{}", self.host, self.port);
        info!("Log format: {}", if self.log_json { "json" } else { "text" });
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
