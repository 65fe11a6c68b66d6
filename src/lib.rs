//! School registry: REST CRUD over teachers, subjects and students on PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use repository::Repository;
pub use routes::{app, common_routes, entity_routes};
pub use service::{StudentService, SubjectService, TeacherService};
pub use state::AppState;
pub use store::ensure_database_exists;
