//! Module declaration and lifecycle

use crate::config::Config;
use crate::domain::Service;
use crate::infra::storage::{self, migrations::Migrator, repositories};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Feedback service module
pub struct FeedbackServiceModule {
    config: RwLock<Config>,
    db: RwLock<Option<Arc<DatabaseConnection>>>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for FeedbackServiceModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl FeedbackServiceModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            db: RwLock::new(None),
            service: RwLock::new(None),
        }
    }

    /// Connect to the configured database and build the service
    pub async fn init(&self) -> Result<()> {
        let db_cfg = self.config.read().database.clone();
        let conn = storage::connect(&db_cfg).await?;
        tracing::info!(url = %db_cfg.redacted_url(), "Database connected");
        self.init_with_connection(conn).await
    }

    /// Build the service on top of an existing connection
    pub async fn init_with_connection(&self, conn: DatabaseConnection) -> Result<()> {
        let auto_migrate = self.config.read().database.auto_migrate;
        if auto_migrate {
            Self::migrate(&conn).await?;
        }

        let conn = Arc::new(conn);

        // Build repositories
        let role_repo = Arc::new(repositories::SeaOrmRoleRepository::new(conn.clone()));
        let user_repo = Arc::new(repositories::SeaOrmUserRepository::new(conn.clone()));
        let feedback_repo = Arc::new(repositories::SeaOrmFeedbackRepository::new(conn.clone()));

        let service = Arc::new(Service::new(role_repo, user_repo, feedback_repo));
        *self.db.write() = Some(conn);
        *self.service.write() = Some(service);

        tracing::info!("Feedback service initialized");
        Ok(())
    }

    /// Apply all pending schema migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("Feedback service migrations completed");
        Ok(())
    }

    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    pub fn connection(&self) -> Result<Arc<DatabaseConnection>> {
        self.db
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Database not connected"))
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }
}
