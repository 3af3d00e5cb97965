//! Auth Middleware
//!
//! Authentication gate and role gate for admin routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;

use crate::application::AuthenticateUseCase;
use crate::domain::entity::admin::AuthenticatedAdmin;
use crate::domain::repository::AdminRepository;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires a valid bearer token for an active admin
///
/// On success the [`AuthenticatedAdmin`] is stored in request extensions.
pub async fn require_admin<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer_token(req.headers()).map(str::to_owned);

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.tokens.clone());
    let admin = use_case.execute(token.as_deref()).await?;

    req.extensions_mut().insert(admin);

    Ok(next.run(req).await)
}

/// Middleware that only lets the `admin` role through
///
/// Must run after [`require_admin`]; a request without an attached admin is
/// rejected as well.
pub async fn require_admin_role(req: Request, next: Next) -> Result<Response, AuthError> {
    let is_admin = req
        .extensions()
        .get::<AuthenticatedAdmin>()
        .is_some_and(AuthenticatedAdmin::is_admin);

    if !is_admin {
        return Err(AuthError::Forbidden);
    }

    Ok(next.run(req).await)
}
