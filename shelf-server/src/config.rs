//! Server configuration read from the environment

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime settings for the server binary
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`SHELF_BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Directory holding the record database (`SHELF_STORAGE_PATH`)
    pub storage_path: PathBuf,

    /// Comma-separated allowed origins, or "*" (`SHELF_CORS_ORIGINS`)
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            storage_path: PathBuf::from("./shelf_data"),
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Load settings, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let bind_addr = match std::env::var("SHELF_BIND_ADDR") {
            Ok(addr) => addr
                .parse()
                .with_context(|| format!("Invalid SHELF_BIND_ADDR: {}", addr))?,
            Err(_) => defaults.bind_addr,
        };

        let storage_path = std::env::var("SHELF_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_path);

        let cors_origins = std::env::var("SHELF_CORS_ORIGINS").ok();

        Ok(Self {
            bind_addr,
            storage_path,
            cors_origins,
        })
    }

    /// Path of the JSON record database
    pub fn database_path(&self) -> PathBuf {
        self.storage_path.join("db.json")
    }
}
