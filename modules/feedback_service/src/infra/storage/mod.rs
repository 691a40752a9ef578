//! Storage layer - database entities and repositories

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Open a connection pool for the configured database
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(1)
        .sqlx_logging(false);

    tracing::debug!(max_connections = cfg.max_connections, "Connecting to database");
    Database::connect(opts)
        .await
        .with_context(|| format!("failed to connect to database at {}", cfg.redacted_url()))
}
