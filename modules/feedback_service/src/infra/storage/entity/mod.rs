//! SeaORM entities for database tables

pub mod feedback;
pub mod role;
pub mod user;
