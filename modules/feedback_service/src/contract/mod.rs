//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::FeedbackError;
pub use model::{
    Feedback, FeedbackType, NewFeedback, NewRole, NewUser, Role, User, UserPatch,
    DEFAULT_ROLE_ID, MAX_EMAIL_LEN, MAX_USERNAME_LEN,
};
