//! Route Composition
//!
//! Mounts the auth and question routers under `/api`, adds the health check,
//! the JSON 404 fallback, tracing and CORS.

use axum::{
    Json, Router,
    extract::OriginalUri,
    http::{HeaderValue, Method, header},
    routing::get,
};
use kernel::error::app_error::AppError;
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use auth::domain::AdminRepository;
use auth::{AuthAppState, auth_router, protect};
use question::domain::repository::{AnalyticsRepository, QuestionRepository};
use question::{QuestionAppState, admin_router, dashboard_router, public_router};

/// Full application router
pub fn app<A, Q>(
    auth_state: AuthAppState<A>,
    question_state: QuestionAppState<Q>,
    frontend_origins: &[String],
) -> Router
where
    A: AdminRepository + Clone + Send + Sync + 'static,
    Q: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    let questions = public_router(question_state.clone())
        .merge(protect(admin_router(question_state.clone()), auth_state.clone()));

    let admin = auth_router(auth_state.clone())
        .merge(protect(dashboard_router(question_state), auth_state));

    Router::new()
        .route("/api/health", get(health))
        .nest("/api/questions", questions)
        .nest("/api/admin", admin)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors(frontend_origins))
}

fn cors(frontend_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

/// GET /api/health
async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "DSA Platform API is running",
        "timestamp": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    }))
}

/// Unknown paths and known paths hit with an unsupported method
async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::not_found(format!("Route {} not found", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::{AuthConfig, InMemoryAdminRepository, TokenService};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use question::{InMemoryQuestionRepository, QuestionConfig};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let auth_state = AuthAppState::new(
            InMemoryAdminRepository::new(),
            TokenService::new(&AuthConfig::with_random_secret()),
        );
        let question_state =
            QuestionAppState::new(InMemoryQuestionRepository::new(), QuestionConfig::default());
        app(
            auth_state,
            question_state,
            &["http://localhost:3000".to_string()],
        )
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let response = test_app().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/api/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "DSA Platform API is running");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = send(Request::get("/api/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "success": false, "message": "Route /api/nope not found" })
        );

        // Known path, wrong method
        let (status, body) = send(Request::get("/api/admin/login").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "success": false, "message": "Route /api/admin/login not found" })
        );

        let req = Request::patch("/api/questions").body(Body::empty()).unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Route /api/questions not found");
    }

    #[tokio::test]
    async fn test_routes_are_mounted() {
        let (status, body) = send(Request::get("/api/questions").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currentPage"], 1);

        let (status, _) = send(
            Request::get("/api/admin/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            Request::get("/api/admin/dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
