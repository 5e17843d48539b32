//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    observability::LoggingConfig, server::ServerRuntimeConfig, storage::StorageConfig,
};

pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod storage;

/// Catalogo JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "catalogo-json", about = "Catalogo JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Products file settings.
    #[command(flatten)]
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Address the server binds to
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}
