//! Login Use Case
//!
//! Authenticates the administrator by email + password and issues a token.

use std::sync::Arc;

use kernel::error::field::FieldErrors;
use kernel::id::AdminId;
use platform::password::PasswordPolicyError;

use crate::application::token::TokenService;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::{
    admin_password::RawPassword, admin_role::AdminRole, email::Email,
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub admin_id: AdminId,
    pub email: Email,
    pub role: AdminRole,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AdminRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let (email, password) = Self::validate(input)?;

        let admin = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Checked before the password so the answer does not depend on it
        if !admin.can_login() {
            return Err(AuthError::AccountInactive);
        }

        let verified = password.is_some_and(|password| admin.password.verify(&password));
        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&admin.admin_id)?;

        tracing::info!(admin_id = %admin.admin_id, "Admin logged in");

        Ok(LoginOutput {
            admin_id: admin.admin_id,
            email: admin.email,
            role: admin.role,
            token,
        })
    }

    /// Field validation, every failing field reported at once
    ///
    /// The password comes back as `None` when it passes the required and
    /// minimum-length rules but could never match a stored hash (too long or
    /// not encodable); login then fails like any wrong password.
    fn validate(input: LoginInput) -> AuthResult<(Email, Option<RawPassword>)> {
        let mut errors = FieldErrors::new();

        let email = Email::new(input.email)
            .map_err(|e| errors.push("email", e.to_string()))
            .ok();

        let password = match RawPassword::new(input.password.trim().to_string()) {
            Ok(password) => Some(Some(password)),
            Err(PasswordPolicyError::EmptyOrWhitespace) => {
                errors.push("password", "Password is required");
                None
            }
            Err(PasswordPolicyError::TooShort { .. }) => {
                errors.push("password", "Password must be at least 6 characters");
                None
            }
            Err(PasswordPolicyError::TooLong { .. } | PasswordPolicyError::InvalidCharacter) => {
                Some(None)
            }
        };

        match (email, password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(AuthError::Validation(errors.into_vec())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::domain::entity::admin::Admin;
    use crate::domain::repository::AdminRepository;
    use crate::domain::value_object::admin_password::AdminPassword;
    use crate::infra::memory::InMemoryAdminRepository;

    async fn setup(active: bool) -> (LoginUseCase<InMemoryAdminRepository>, Arc<TokenService>, Admin) {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let raw = RawPassword::new("admin123".to_string()).unwrap();
        let mut admin = Admin::new(
            Email::new("admin@example.com").unwrap(),
            AdminPassword::from_raw(&raw).unwrap(),
        );
        admin.is_active = active;
        repo.create(&admin).await.unwrap();

        let tokens = Arc::new(TokenService::new(&AuthConfig::with_random_secret()));
        (LoginUseCase::new(repo, tokens.clone()), tokens, admin)
    }

    fn input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_token_resolves_to_admin() {
        let (use_case, tokens, admin) = setup(true).await;

        let output = use_case
            .execute(input("admin@example.com", "admin123"))
            .await
            .unwrap();

        assert_eq!(output.admin_id, admin.admin_id);
        assert_eq!(output.role, AdminRole::Admin);
        assert_eq!(tokens.verify(&output.token).unwrap(), admin.admin_id);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (use_case, _, _) = setup(true).await;
        let result = use_case.execute(input("admin@example.com", "wrong-pass")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_same_error() {
        let (use_case, _, _) = setup(true).await;
        let result = use_case.execute(input("nobody@example.com", "admin123")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_email_is_case_sensitive() {
        let (use_case, _, _) = setup(true).await;
        let result = use_case.execute(input("ADMIN@example.com", "admin123")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_inactive_rejected_regardless_of_password() {
        let (use_case, _, _) = setup(false).await;

        let right = use_case.execute(input("admin@example.com", "admin123")).await;
        let wrong = use_case.execute(input("admin@example.com", "nope-nope")).await;

        assert!(matches!(right, Err(AuthError::AccountInactive)));
        assert!(matches!(wrong, Err(AuthError::AccountInactive)));
    }

    #[tokio::test]
    async fn test_password_is_trimmed() {
        let (use_case, _, _) = setup(true).await;
        let result = use_case.execute(input(" admin@example.com ", " admin123 ")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_validation_reports_each_field() {
        let (use_case, _, _) = setup(true).await;

        let Err(AuthError::Validation(errors)) = use_case.execute(input("", "")).await else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Email is required");
        assert_eq!(errors[1].field, "password");
        assert_eq!(errors[1].message, "Password is required");

        let Err(AuthError::Validation(errors)) =
            use_case.execute(input("not-an-email", "abc")).await
        else {
            panic!("expected validation failure");
        };
        assert_eq!(errors[0].message, "Please provide a valid email address");
        assert_eq!(errors[1].message, "Password must be at least 6 characters");
    }

    #[tokio::test]
    async fn test_overlong_password_is_invalid_credentials() {
        let (use_case, _, _) = setup(true).await;
        let long = "a".repeat(200);

        let result = use_case.execute(input("admin@example.com", &long)).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));

        let result = use_case.execute(input("nobody@example.com", &long)).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_overlong_password_on_inactive_account() {
        let (use_case, _, _) = setup(false).await;
        let result = use_case
            .execute(input("admin@example.com", &"a".repeat(200)))
            .await;
        assert!(matches!(result, Err(AuthError::AccountInactive)));
    }
}
