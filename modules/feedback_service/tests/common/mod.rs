//! Common test utilities

#![allow(dead_code)]

use feedback_service::config::{Config, DatabaseConfig};
use feedback_service::domain::Service;
use feedback_service::{FeedbackServiceModule, NewRole, Role};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Config for a migrated in-memory SQLite database.
///
/// One connection only: every pooled connection would otherwise get its own
/// empty in-memory database.
pub fn memory_config() -> Config {
    Config {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            auto_migrate: true,
        },
        ..Default::default()
    }
}

/// Initialized module backed by a fresh in-memory database
pub async fn setup_module() -> FeedbackServiceModule {
    let module = FeedbackServiceModule::new(memory_config());
    module.init().await.expect("Failed to initialize module");
    module
}

pub async fn setup_service() -> (Arc<Service>, Arc<DatabaseConnection>) {
    let module = setup_module().await;
    (
        module.service().expect("Service missing"),
        module.connection().expect("Connection missing"),
    )
}

/// Insert the role every user falls back to
pub async fn seed_default_role(service: &Service) -> Role {
    service
        .create_role(NewRole::with_id(1, "admin"))
        .await
        .expect("Failed to create default role")
}
