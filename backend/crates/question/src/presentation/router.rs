//! Question Routers
//!
//! Routers come back unguarded; the binary wraps the admin ones with
//! `auth::protect`.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::domain::repository::{AnalyticsRepository, QuestionRepository};
use crate::presentation::handlers::{self, QuestionAppState};

/// Public catalog routes (`GET /`, `GET /{id}`)
pub fn public_router<R>(state: QuestionAppState<R>) -> Router
where
    R: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::list_questions::<R>))
        .route("/{id}", get(handlers::get_question::<R>))
        .with_state(state)
}

/// Catalog mutations (`POST /`, `PUT /{id}`, `DELETE /{id}`)
pub fn admin_router<R>(state: QuestionAppState<R>) -> Router
where
    R: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(handlers::create_question::<R>))
        .route(
            "/{id}",
            put(handlers::update_question::<R>).delete(handlers::delete_question::<R>),
        )
        .with_state(state)
}

/// Analytics (`GET /dashboard`)
pub fn dashboard_router<R>(state: QuestionAppState<R>) -> Router
where
    R: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/dashboard", get(handlers::dashboard::<R>))
        .with_state(state)
}
