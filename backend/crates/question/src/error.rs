//! Question Error Types
//!
//! This module provides question-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, field::FieldError, kind::ErrorKind};
use thiserror::Error;

/// Question-specific result type alias
pub type QuestionResult<T> = Result<T, QuestionError>;

/// Question-specific error variants
///
/// Validation and duplicate failures are 400s with a client-facing message;
/// everything unanticipated is a 500 whose cause is only echoed in
/// development mode.
#[derive(Debug, Error)]
pub enum QuestionError {
    /// One or more fields failed validation
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Create pre-check: a question with this title exists
    #[error("This question already exists")]
    DuplicateTitle,

    /// Update pre-check: another question has the resulting composite key
    #[error("Another question already exists with this combination.")]
    DuplicateCombination,

    /// Store-level unique constraint violation
    #[error("Duplicate field value entered. This question already exists.")]
    DuplicateRecord,

    /// Unknown or malformed question id
    #[error("Question not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuestionError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuestionError::Validation(_)
            | QuestionError::DuplicateTitle
            | QuestionError::DuplicateCombination
            | QuestionError::DuplicateRecord => ErrorKind::BadRequest,
            QuestionError::NotFound => ErrorKind::NotFound,
            QuestionError::Database(_) | QuestionError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QuestionError::Database(e) => {
                tracing::error!(error = %e, "Question database error");
            }
            QuestionError::Internal(msg) => {
                tracing::error!(message = %msg, "Question internal error");
            }
            QuestionError::DuplicateRecord => {
                tracing::warn!("Question unique constraint violated");
            }
            _ => {
                tracing::debug!(error = %self, "Question error");
            }
        }
    }
}

/// Carries an internal message as an error source.
#[derive(Debug, Error)]
#[error("{0}")]
struct InternalDetail(String);

impl From<QuestionError> for AppError {
    fn from(err: QuestionError) -> Self {
        match err {
            QuestionError::Validation(errors) => AppError::validation(errors),
            QuestionError::Database(e) => AppError::from(e),
            QuestionError::Internal(msg) => {
                AppError::internal("Internal Server Error").with_source(InternalDetail(msg))
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for QuestionError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_messages() {
        let app = AppError::from(QuestionError::DuplicateTitle);
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.message(), "This question already exists");

        let app = AppError::from(QuestionError::DuplicateCombination);
        assert_eq!(
            app.message(),
            "Another question already exists with this combination."
        );

        let app = AppError::from(QuestionError::DuplicateRecord);
        assert_eq!(
            app.message(),
            "Duplicate field value entered. This question already exists."
        );
    }

    #[test]
    fn test_not_found() {
        let app = AppError::from(QuestionError::NotFound);
        assert_eq!(app.status_code(), 404);
        assert_eq!(app.message(), "Question not found");
    }

    #[test]
    fn test_database_error_is_generic() {
        let app = AppError::from(QuestionError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.message(), "Database error");
        assert!(app.detail().is_some());

        let app = AppError::from(QuestionError::Database(sqlx::Error::WorkerCrashed));
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.message(), "Database error");
    }
}
