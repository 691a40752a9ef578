//! Contract models for the feedback service
//!
//! These mirror the `users`, `roles` and `feedbacks` tables but carry no
//! storage concerns.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::error::FeedbackError;

/// Role assigned to a user when none is given at registration.
pub const DEFAULT_ROLE_ID: i32 = 1;

/// Column width of `users.username`.
pub const MAX_USERNAME_LEN: usize = 50;

/// Column width of `users.email`.
pub const MAX_EMAIL_LEN: usize = 50;

/// Registered account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// System-assigned identifier
    pub id: i32,
    /// Unique login name
    pub username: String,
    /// Unique e-mail address
    pub email: String,
    /// Opaque credential blob, stored as given
    pub password: String,
    /// Whether the account may be used
    pub is_active: bool,
    /// Owning role
    pub role_id: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user.
///
/// `None` for `is_active` or `role_id` leaves the column to its storage
/// default (`true` and [`DEFAULT_ROLE_ID`]).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_active: Option<bool>,
    pub role_id: Option<i32>,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            is_active: None,
            role_id: None,
        }
    }

    pub fn with_role(mut self, role_id: i32) -> Self {
        self.role_id = Some(role_id);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Partial update of a user; only `Some` fields are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub role_id: Option<i32>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.is_active.is_none()
            && self.role_id.is_none()
    }
}

/// Named group of users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a role. `id` is system-assigned unless given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub id: Option<i32>,
    pub name: String,
}

impl NewRole {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

/// Kind of a feedback submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackType {
    Complaint,
    Suggestion,
    Request,
    Compliment,
}

impl FeedbackType {
    pub const ALL: [FeedbackType; 4] = [
        FeedbackType::Complaint,
        FeedbackType::Suggestion,
        FeedbackType::Request,
        FeedbackType::Compliment,
    ];

    /// Tag stored in `feedbacks.feedback_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Complaint => "complaint",
            FeedbackType::Suggestion => "suggestion",
            FeedbackType::Request => "request",
            FeedbackType::Compliment => "compliment",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackType {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FeedbackError::InvalidFeedbackType {
                value: s.to_string(),
            })
    }
}

/// Append-only feedback submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id: i32,
    /// Free-text body
    pub content: String,
    pub feedback_type: FeedbackType,
    pub created_at: DateTime<Utc>,
}

/// Input for submitting feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub content: String,
    pub feedback_type: FeedbackType,
}

impl NewFeedback {
    pub fn new(feedback_type: FeedbackType, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            feedback_type,
        }
    }
}
