//! Contract error types for the feedback service

/// Feedback service domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    /// User, role or feedback not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (user, role, feedback)
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// Unique constraint violated
    #[error("Conflict on {field}: {detail}")]
    Conflict {
        /// Offending column (`username`, `email`) or `unknown`
        field: String,
        /// Storage engine message
        detail: String,
    },

    /// Foreign key constraint violated
    #[error("Referential integrity violation: {detail}")]
    ForeignKey { detail: String },

    /// Value does not fit the column
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Tag outside complaint, suggestion, request, compliment
    #[error("Invalid feedback type: {value}")]
    InvalidFeedbackType { value: String },

    #[error("Internal error")]
    Internal,
}

impl FeedbackError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }
}
