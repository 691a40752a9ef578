//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    Feedback, FeedbackType, NewFeedback, NewRole, NewUser, Role, User, UserPatch,
};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for roles
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Insert a role
    async fn create(&self, new_role: &NewRole) -> Result<Role>;

    /// Find a role by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Role>>;

    /// Change the role name; `None` if the role does not exist
    async fn rename(&self, id: i32, name: &str) -> Result<Option<Role>>;

    /// Delete a role; `false` if nothing was deleted
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// Repository for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user
    async fn create(&self, new_user: &NewUser) -> Result<User>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Apply a patch; `None` if the user does not exist
    async fn update(&self, id: i32, patch: &UserPatch) -> Result<Option<User>>;

    /// Delete a user; `false` if nothing was deleted
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// Repository for feedback. Append-only: there is no update or delete.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create(&self, new_feedback: &NewFeedback) -> Result<Feedback>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Feedback>>;

    /// All feedback of one type, oldest first
    async fn list_by_type(&self, feedback_type: FeedbackType) -> Result<Vec<Feedback>>;
}
