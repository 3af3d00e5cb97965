//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::domain::repository::AdminRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{require_admin, require_admin_role};

/// Create the admin auth router (`/login`, `/profile`)
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    let protected = protect(Router::new().route("/profile", get(handlers::profile)), state.clone());

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
        .merge(protected)
}

/// Put routes behind the authentication gate and the role gate
pub fn protect<R>(router: Router, state: AuthAppState<R>) -> Router
where
    R: AdminRepository + Clone + Send + Sync + 'static,
{
    // Layers run outermost-last: the token check happens before the role check.
    router
        .route_layer(middleware::from_fn(require_admin_role))
        .route_layer(middleware::from_fn_with_state(state, require_admin::<R>))
}
