//! Question Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Question entity, enums, validation, repository traits
//! - `application/` - List, get, create, update, delete, dashboard
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Uniqueness
//! `(title, platform, questionNumber, difficulty, category)` is unique in the
//! store. Create pre-checks the title alone and update pre-checks the full
//! key; both surface a store-level violation as its own error.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::QuestionConfig;
pub use error::{QuestionError, QuestionResult};
pub use infra::{memory::InMemoryQuestionRepository, postgres::PgQuestionRepository};
pub use presentation::handlers::QuestionAppState;
pub use presentation::router::{admin_router, dashboard_router, public_router};
