//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, field::FieldError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login input failed field validation
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Login attempted on an inactive account
    #[error("Admin account is inactive")]
    AccountInactive,

    /// No bearer token on a protected request
    #[error("Not authorized. No token provided.")]
    MissingToken,

    /// Bad signature, malformed payload or bad subject
    #[error("Not authorized. Token invalid or expired.")]
    TokenInvalid,

    /// Token past its expiry
    #[error("Token expired. Please login again.")]
    TokenExpired,

    /// Token subject no longer exists
    #[error("Admin not found. Authorization failed.")]
    AdminNotFound,

    /// Token subject exists but was deactivated
    #[error("Admin account is inactive.")]
    AdminInactive,

    /// Role gate rejection
    #[error("Access denied. Admin privileges required.")]
    Forbidden,

    /// Insert hit the email uniqueness constraint
    #[error("Admin already exists")]
    AdminAlreadyExists,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::AdminAlreadyExists => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::AccountInactive
            | AuthError::MissingToken
            | AuthError::TokenInvalid
            | AuthError::TokenExpired
            | AuthError::AdminNotFound
            | AuthError::AdminInactive => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures keep a generic message; the cause travels as the
    /// source and is only rendered in development mode.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Validation(errors) => AppError::validation(errors),
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(msg) => {
                AppError::internal("Internal Server Error").with_source(InternalDetail(msg))
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountInactive => {
                tracing::warn!("Login attempt on inactive account");
            }
            AuthError::TokenExpired => {
                tracing::info!("Expired token presented");
            }
            AuthError::TokenInvalid => {
                tracing::warn!("Invalid token presented");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

/// Carries an internal message as an error source.
#[derive(Debug, Error)]
#[error("{0}")]
struct InternalDetail(String);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_errors_are_unauthorized() {
        for err in [
            AuthError::MissingToken,
            AuthError::TokenInvalid,
            AuthError::TokenExpired,
            AuthError::AdminNotFound,
            AuthError::AdminInactive,
            AuthError::InvalidCredentials,
            AuthError::AccountInactive,
        ] {
            assert_eq!(err.kind().status_code(), 401, "{err}");
        }
        assert_eq!(AuthError::Forbidden.kind().status_code(), 403);
    }

    #[test]
    fn test_messages_are_client_facing() {
        let app = AuthError::MissingToken.into_app_error();
        assert_eq!(app.message(), "Not authorized. No token provided.");

        let app = AuthError::Forbidden.into_app_error();
        assert_eq!(app.message(), "Access denied. Admin privileges required.");
    }

    #[test]
    fn test_internal_hides_message_keeps_detail() {
        let app = AuthError::Internal("hash column corrupt".to_string()).into_app_error();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.message(), "Internal Server Error");
        assert_eq!(app.detail().as_deref(), Some("hash column corrupt"));
    }

    #[test]
    fn test_validation_carries_fields() {
        let app = AuthError::Validation(vec![FieldError::new("email", "Email is required")])
            .into_app_error();
        assert_eq!(app.message(), "Validation failed");
        assert_eq!(app.field_errors().len(), 1);
    }
}
