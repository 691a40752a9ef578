//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::{Feedback, FeedbackType, NewFeedback, NewRole, NewUser, Role, User};
use sea_orm::ActiveValue::{NotSet, Set};

use super::entity::{feedback, role, user};

// ===== User Conversions =====

impl From<user::Model> for User {
    fn from(entity: user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password: entity.password,
            is_active: entity.is_active,
            role_id: entity.role_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&NewUser> for user::ActiveModel {
    fn from(model: &NewUser) -> Self {
        Self {
            id: NotSet,
            username: Set(model.username.clone()),
            email: Set(model.email.clone()),
            password: Set(model.password.clone()),
            // NotSet falls through to the column default
            is_active: model.is_active.map_or(NotSet, Set),
            role_id: model.role_id.map_or(NotSet, Set),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

// ===== Role Conversions =====

impl From<role::Model> for Role {
    fn from(entity: role::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&NewRole> for role::ActiveModel {
    fn from(model: &NewRole) -> Self {
        Self {
            id: model.id.map_or(NotSet, Set),
            name: Set(model.name.clone()),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

// ===== Feedback Conversions =====

impl From<feedback::StoredFeedbackType> for FeedbackType {
    fn from(stored: feedback::StoredFeedbackType) -> Self {
        match stored {
            feedback::StoredFeedbackType::Complaint => FeedbackType::Complaint,
            feedback::StoredFeedbackType::Suggestion => FeedbackType::Suggestion,
            feedback::StoredFeedbackType::Request => FeedbackType::Request,
            feedback::StoredFeedbackType::Compliment => FeedbackType::Compliment,
        }
    }
}

impl From<FeedbackType> for feedback::StoredFeedbackType {
    fn from(kind: FeedbackType) -> Self {
        match kind {
            FeedbackType::Complaint => feedback::StoredFeedbackType::Complaint,
            FeedbackType::Suggestion => feedback::StoredFeedbackType::Suggestion,
            FeedbackType::Request => feedback::StoredFeedbackType::Request,
            FeedbackType::Compliment => feedback::StoredFeedbackType::Compliment,
        }
    }
}

impl From<feedback::Model> for Feedback {
    fn from(entity: feedback::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            feedback_type: entity.feedback_type.into(),
            created_at: entity.created_at,
        }
    }
}

impl From<&NewFeedback> for feedback::ActiveModel {
    fn from(model: &NewFeedback) -> Self {
        Self {
            id: NotSet,
            content: Set(model.content.clone()),
            feedback_type: Set(model.feedback_type.into()),
            created_at: NotSet,
        }
    }
}
