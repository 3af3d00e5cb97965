//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Admin entity, value objects, repository trait
//! - `application/` - Login, token verification, bootstrap seeding
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, gates
//!
//! ## Features
//! - Email + password login for the single administrator
//! - Stateless HS256 bearer tokens (no server-side session table)
//! - Authentication gate (token → live, active admin) and role gate
//! - Idempotent admin seed at startup
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Unknown email and wrong password are indistinguishable to the caller
//! - Every gated request re-checks that the admin exists and is active

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use domain::entity::admin::AuthenticatedAdmin;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryAdminRepository, postgres::PgAdminRepository};
pub use presentation::handlers::AuthAppState;
pub use presentation::router::{auth_router, protect};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
