//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    storage::StaticFilesConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod storage;

/// Afterschool JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "afterschool-json", about = "Afterschool Lessons JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request metrics and slow request settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Lesson and order store settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Static image settings.
    #[command(flatten)]
    pub static_files: StaticFilesConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
