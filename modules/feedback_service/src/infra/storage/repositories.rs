//! SeaORM repository implementations
//!
//! Inserts and updates go through `ActiveModel::insert`/`update` so the
//! entities' `before_save` hooks stamp the timestamps.

use crate::contract::{
    Feedback, FeedbackType, NewFeedback, NewRole, NewUser, Role, User, UserPatch,
};
use crate::domain::repository::{FeedbackRepository, RoleRepository, UserRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbBackend, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Statement,
};
use std::sync::Arc;

use super::entity::{feedback, role, user};

// ===== Role Repository =====

pub struct SeaOrmRoleRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmRoleRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for SeaOrmRoleRepository {
    async fn create(&self, new_role: &NewRole) -> Result<Role> {
        let active: role::ActiveModel = new_role.into();
        let created = active.insert(&*self.db).await?;
        if new_role.id.is_some() {
            if let Some(stmt) = role_sequence_sync(self.db.get_database_backend()) {
                self.db.execute(stmt).await?;
                tracing::debug!(role_id = created.id, "Role id sequence advanced");
            }
        }
        Ok(created.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Role>> {
        let result = role::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn rename(&self, id: i32, name: &str) -> Result<Option<Role>> {
        let Some(existing) = role::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = Set(name.to_string());
        let updated = active.update(&*self.db).await?;
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = role::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

/// An explicit id bypasses the Postgres serial sequence, so move the
/// sequence past the highest stored id. SQLite picks `MAX(id) + 1` itself.
pub(crate) fn role_sequence_sync(backend: DbBackend) -> Option<Statement> {
    match backend {
        DbBackend::Postgres => Some(Statement::from_string(
            backend,
            "SELECT setval(pg_get_serial_sequence('roles', 'id'), (SELECT MAX(id) FROM roles))",
        )),
        _ => None,
    }
}

// ===== User Repository =====

pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, new_user: &NewUser) -> Result<User> {
        let active: user::ActiveModel = new_user.into();
        let created = active.insert(&*self.db).await?;
        Ok(created.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        let result = user::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&*self.db)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&*self.db)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn update(&self, id: i32, patch: &UserPatch) -> Result<Option<User>> {
        let Some(existing) = user::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(existing.into()));
        }

        let mut active = existing.into_active_model();
        if let Some(username) = &patch.username {
            active.username = Set(username.clone());
        }
        if let Some(email) = &patch.email {
            active.email = Set(email.clone());
        }
        if let Some(password) = &patch.password {
            active.password = Set(password.clone());
        }
        if let Some(is_active) = patch.is_active {
            active.is_active = Set(is_active);
        }
        if let Some(role_id) = patch.role_id {
            active.role_id = Set(role_id);
        }

        let updated = active.update(&*self.db).await?;
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = user::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Feedback Repository =====

pub struct SeaOrmFeedbackRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFeedbackRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeedbackRepository for SeaOrmFeedbackRepository {
    async fn create(&self, new_feedback: &NewFeedback) -> Result<Feedback> {
        let active: feedback::ActiveModel = new_feedback.into();
        let created = active.insert(&*self.db).await?;
        Ok(created.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Feedback>> {
        let result = feedback::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list_by_type(&self, feedback_type: FeedbackType) -> Result<Vec<Feedback>> {
        let stored: feedback::StoredFeedbackType = feedback_type.into();
        let results = feedback::Entity::find()
            .filter(feedback::Column::FeedbackType.eq(stored))
            .order_by_asc(feedback::Column::CreatedAt)
            .order_by_asc(feedback::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_sequence_sync_targets_postgres_only() {
        let stmt = role_sequence_sync(DbBackend::Postgres).unwrap();
        assert!(stmt.sql.contains("pg_get_serial_sequence('roles', 'id')"));
        assert!(stmt.sql.contains("MAX(id)"));

        assert!(role_sequence_sync(DbBackend::Sqlite).is_none());
        assert!(role_sequence_sync(DbBackend::MySql).is_none());
    }
}
