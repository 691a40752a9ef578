//! Domain service - lifecycle orchestration over the repositories

use crate::contract::{
    Feedback, FeedbackError, FeedbackType, NewFeedback, NewRole, NewUser, Role, User, UserPatch,
};
use super::repository::{FeedbackRepository, RoleRepository, UserRepository};
use super::validation;
use sea_orm::{DbErr, SqlErr};
use std::sync::Arc;

/// Domain service for users, roles and feedback
pub struct Service {
    role_repo: Arc<dyn RoleRepository>,
    user_repo: Arc<dyn UserRepository>,
    feedback_repo: Arc<dyn FeedbackRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        role_repo: Arc<dyn RoleRepository>,
        user_repo: Arc<dyn UserRepository>,
        feedback_repo: Arc<dyn FeedbackRepository>,
    ) -> Self {
        Self {
            role_repo,
            user_repo,
            feedback_repo,
        }
    }

    // ===== Role Operations =====

    pub async fn create_role(&self, new_role: NewRole) -> Result<Role, FeedbackError> {
        let role = self
            .role_repo
            .create(&new_role)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(role_id = role.id, name = %role.name, "Role created");
        Ok(role)
    }

    pub async fn get_role(&self, id: i32) -> Result<Role, FeedbackError> {
        self.role_repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| FeedbackError::not_found("role", id))
    }

    pub async fn rename_role(&self, id: i32, name: &str) -> Result<Role, FeedbackError> {
        let role = self
            .role_repo
            .rename(id, name)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| FeedbackError::not_found("role", id))?;

        tracing::info!(role_id = id, name, "Role renamed");
        Ok(role)
    }

    /// Delete a role. Fails with `ForeignKey` while users still reference it.
    pub async fn delete_role(&self, id: i32) -> Result<(), FeedbackError> {
        let deleted = self
            .role_repo
            .delete(id)
            .await
            .map_err(map_storage_error)?;
        if !deleted {
            return Err(FeedbackError::not_found("role", id));
        }

        tracing::info!(role_id = id, "Role deleted");
        Ok(())
    }

    // ===== User Operations =====

    /// Insert a user. Unset `is_active`/`role_id` take the column defaults.
    pub async fn register_user(&self, new_user: NewUser) -> Result<User, FeedbackError> {
        validation::validate_new_user(&new_user)?;

        let user = self
            .user_repo
            .create(&new_user)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(
            user_id = user.id,
            username = %user.username,
            role_id = user.role_id,
            "User registered"
        );
        Ok(user)
    }

    pub async fn get_user(&self, id: i32) -> Result<User, FeedbackError> {
        self.user_repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| FeedbackError::not_found("user", id))
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<User, FeedbackError> {
        tracing::debug!(username, "Looking up user by username");
        self.user_repo
            .find_by_username(username)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| FeedbackError::not_found("user", username))
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<User, FeedbackError> {
        tracing::debug!(email, "Looking up user by email");
        self.user_repo
            .find_by_email(email)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| FeedbackError::not_found("user", email))
    }

    /// Apply a patch. `updated_at` moves, `created_at` stays.
    pub async fn update_user(&self, id: i32, patch: UserPatch) -> Result<User, FeedbackError> {
        validation::validate_user_patch(&patch)?;

        let user = self
            .user_repo
            .update(id, &patch)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| FeedbackError::not_found("user", id))?;

        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    pub async fn deactivate_user(&self, id: i32) -> Result<User, FeedbackError> {
        self.update_user(
            id,
            UserPatch {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete_user(&self, id: i32) -> Result<(), FeedbackError> {
        let deleted = self
            .user_repo
            .delete(id)
            .await
            .map_err(map_storage_error)?;
        if !deleted {
            return Err(FeedbackError::not_found("user", id));
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    // ===== Feedback Operations =====

    pub async fn submit_feedback(&self, new_feedback: NewFeedback) -> Result<Feedback, FeedbackError> {
        let feedback = self
            .feedback_repo
            .create(&new_feedback)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(
            feedback_id = feedback.id,
            feedback_type = %feedback.feedback_type,
            "Feedback submitted"
        );
        Ok(feedback)
    }

    /// Submit feedback whose type arrives as a raw tag
    pub async fn submit_feedback_tagged(
        &self,
        feedback_type: &str,
        content: &str,
    ) -> Result<Feedback, FeedbackError> {
        let feedback_type = feedback_type.parse::<FeedbackType>().inspect_err(|_| {
            tracing::warn!(feedback_type, "Rejected unknown feedback type");
        })?;
        self.submit_feedback(NewFeedback::new(feedback_type, content))
            .await
    }

    pub async fn get_feedback(&self, id: i32) -> Result<Feedback, FeedbackError> {
        self.feedback_repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| FeedbackError::not_found("feedback", id))
    }

    pub async fn list_feedback_by_type(
        &self,
        feedback_type: FeedbackType,
    ) -> Result<Vec<Feedback>, FeedbackError> {
        self.feedback_repo
            .list_by_type(feedback_type)
            .await
            .map_err(map_storage_error)
    }
}

// ===== Helper Functions =====

/// Classify a repository failure by the constraint the database reported
pub(crate) fn map_storage_error(err: anyhow::Error) -> FeedbackError {
    match err.downcast_ref::<DbErr>().and_then(DbErr::sql_err) {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!(%detail, "Unique constraint violated");
            FeedbackError::Conflict {
                field: unique_field(&detail).to_string(),
                detail,
            }
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::warn!(%detail, "Foreign key constraint violated");
            FeedbackError::ForeignKey { detail }
        }
        _ => {
            tracing::error!(error = ?err, "Storage operation failed");
            FeedbackError::Internal
        }
    }
}

/// Unique column named in a driver message, e.g.
/// `UNIQUE constraint failed: users.email` or `... "users_username_key"`
fn unique_field(detail: &str) -> &'static str {
    if detail.contains("username") {
        "username"
    } else if detail.contains("email") {
        "email"
    } else {
        "unknown"
    }
}
