//! Request extractors that reject with the shared error envelope

use axum::extract::FromRequest;

use crate::error::app_error::AppError;

/// `axum::Json` whose rejection renders as an [`AppError`] envelope
/// instead of axum's plain-text body.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
