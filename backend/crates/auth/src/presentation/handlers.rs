//! HTTP Handlers

use axum::Extension;
use axum::extract::State;
use kernel::extract::JsonBody;
use kernel::response::ApiResponse;
use std::sync::Arc;

use crate::application::{LoginInput, LoginUseCase, TokenService};
use crate::domain::entity::admin::AuthenticatedAdmin;
use crate::domain::repository::AdminRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, ProfileResponse};

/// Shared state for auth handlers and the gate
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

impl<R> AuthAppState<R>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, tokens: TokenService) -> Self {
        Self {
            repo: Arc::new(repo),
            tokens: Arc::new(tokens),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/admin/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<ApiResponse<LoginResponse>>
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(ApiResponse::with_message(
        "Login successful",
        LoginResponse::from(output),
    ))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/admin/profile
pub async fn profile(
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> ApiResponse<ProfileResponse> {
    ApiResponse::ok(ProfileResponse::from(&admin))
}
