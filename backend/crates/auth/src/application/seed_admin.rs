//! Seed Admin Use Case
//!
//! Creates the bootstrap administrator at startup if it does not exist yet.

use std::sync::Arc;

use crate::domain::entity::admin::Admin;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::{
    admin_password::{AdminPassword, RawPassword},
    email::Email,
};
use crate::error::{AuthError, AuthResult};

/// Bootstrap credentials (from `ADMIN_EMAIL` / `ADMIN_PASSWORD`)
pub struct SeedAdminInput {
    pub email: String,
    pub password: String,
}

/// What the seed step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadyExists,
}

/// Seed admin use case
pub struct SeedAdminUseCase<R>
where
    R: AdminRepository,
{
    repo: Arc<R>,
}

impl<R> SeedAdminUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Idempotent; safe to run on every boot and from several instances.
    pub async fn execute(&self, input: SeedAdminInput) -> AuthResult<SeedOutcome> {
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Internal(format!("ADMIN_EMAIL: {}", e)))?;

        if self.repo.find_by_email(&email).await?.is_some() {
            tracing::info!(email = %email, "Admin already exists. Skipping seed.");
            return Ok(SeedOutcome::AlreadyExists);
        }

        let raw = RawPassword::new(input.password)
            .map_err(|e| AuthError::Internal(format!("ADMIN_PASSWORD: {}", e)))?;
        let admin = Admin::new(email, AdminPassword::from_raw(&raw)?);

        match self.repo.create(&admin).await {
            Ok(()) => {
                tracing::info!(email = %admin.email, "Admin account created");
                Ok(SeedOutcome::Created)
            }
            // Another instance inserted it between our lookup and insert
            Err(AuthError::AdminAlreadyExists) => {
                tracing::info!(email = %admin.email, "Admin already exists. Skipping seed.");
                Ok(SeedOutcome::AlreadyExists)
            }
            Err(e) => Err(e),
        }
    }
}
