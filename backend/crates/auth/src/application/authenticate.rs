//! Authenticate Use Case
//!
//! Resolves a bearer token to a live, active administrator.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::admin::AuthenticatedAdmin;
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: AdminRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> AuthenticateUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Check the token and load the admin it names
    ///
    /// `None` means the request carried no usable bearer token.
    pub async fn execute(&self, token: Option<&str>) -> AuthResult<AuthenticatedAdmin> {
        let token = token.ok_or(AuthError::MissingToken)?;

        let admin_id = self.tokens.verify(token)?;

        let admin = self
            .repo
            .find_by_id(&admin_id)
            .await?
            .ok_or(AuthError::AdminNotFound)?;

        if !admin.can_login() {
            return Err(AuthError::AdminInactive);
        }

        Ok(admin.authenticated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use kernel::id::AdminId;

    use crate::application::config::AuthConfig;
    use crate::domain::entity::admin::Admin;
    use crate::domain::repository::AdminRepository;
    use crate::domain::value_object::{
        admin_password::{AdminPassword, RawPassword},
        email::Email,
    };
    use crate::infra::memory::InMemoryAdminRepository;

    async fn setup(active: bool) -> (AuthenticateUseCase<InMemoryAdminRepository>, Arc<TokenService>, Admin) {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let raw = RawPassword::new("admin123".to_string()).unwrap();
        let mut admin = Admin::new(
            Email::new("admin@example.com").unwrap(),
            AdminPassword::from_raw(&raw).unwrap(),
        );
        admin.is_active = active;
        repo.create(&admin).await.unwrap();

        let tokens = Arc::new(TokenService::new(&AuthConfig::with_random_secret()));
        (AuthenticateUseCase::new(repo, tokens.clone()), tokens, admin)
    }

    #[tokio::test]
    async fn test_valid_token_attaches_admin() {
        let (use_case, tokens, admin) = setup(true).await;
        let token = tokens.issue(&admin.admin_id).unwrap();

        let authed = use_case.execute(Some(&token)).await.unwrap();
        assert_eq!(authed.admin_id, admin.admin_id);
        assert_eq!(authed.email.as_str(), "admin@example.com");
        assert!(authed.is_admin());
    }

    #[tokio::test]
    async fn test_missing_token() {
        let (use_case, _, _) = setup(true).await;
        assert!(matches!(
            use_case.execute(None).await,
            Err(AuthError::MissingToken)
        ));
    }

    #[tokio::test]
    async fn test_expired_token() {
        let (use_case, tokens, admin) = setup(true).await;
        let token = tokens
            .issue_at(&admin.admin_id, Utc::now() - Duration::days(30))
            .unwrap();

        assert!(matches!(
            use_case.execute(Some(&token)).await,
            Err(AuthError::TokenExpired)
        ));
    }

    #[tokio::test]
    async fn test_unknown_admin() {
        let (use_case, tokens, _) = setup(true).await;
        let token = tokens.issue(&AdminId::new()).unwrap();

        assert!(matches!(
            use_case.execute(Some(&token)).await,
            Err(AuthError::AdminNotFound)
        ));
    }

    #[tokio::test]
    async fn test_inactive_admin() {
        let (use_case, tokens, admin) = setup(false).await;
        let token = tokens.issue(&admin.admin_id).unwrap();

        assert!(matches!(
            use_case.execute(Some(&token)).await,
            Err(AuthError::AdminInactive)
        ));
    }
}
