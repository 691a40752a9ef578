//! Feedback Service Module
//!
//! Relational schema for a feedback-collection application: users, the
//! roles they belong to, and append-only feedback submissions. Tables are
//! declared as SeaORM entities and created by `sea-orm-migration`.

// Public exports
pub mod contract;
pub use contract::{
    Feedback, FeedbackError, FeedbackType, NewFeedback, NewRole, NewUser, Role, User, UserPatch,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::FeedbackServiceModule;

pub use infra::storage::migrations::Migrator;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
