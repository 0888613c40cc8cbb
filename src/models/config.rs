//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Write-capable primary database.
    pub database_url: String,
    /// Optional read replica; the primary serves reads when unset.
    pub replica_database_url: Option<String>,
}
