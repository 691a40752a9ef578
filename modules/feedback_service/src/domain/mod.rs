//! Domain layer - lifecycle orchestration over the schema

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{FeedbackRepository, RoleRepository, UserRepository};
pub use service::Service;
