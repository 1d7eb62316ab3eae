// Server Configuration - bind address, seed file and log level
//
// Defaults suit local runs. Each setting can be overridden from the environment
// (or a .env file) with the ACCOUNTS_ prefix:
//
//   ACCOUNTS_HOST        0.0.0.0
//   ACCOUNTS_PORT        3003
//   ACCOUNTS_SEED_PATH   (none, built-in accounts)
//   ACCOUNTS_LOG_LEVEL   info

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "ACCOUNTS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON array of accounts to seed the store with; built-in set when absent
    pub seed_path: Option<PathBuf>,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3003,
            seed_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from the process environment, after reading `.env` if present
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_environment(::config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(environment: ::config::Environment) -> Result<Self> {
        ::config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()
            .context("failed to read ACCOUNTS_* settings")?
            .try_deserialize()
            .context("invalid ACCOUNTS_* settings")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
