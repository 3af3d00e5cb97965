//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::application::{SeedAdminUseCase, SeedOutcome};
use auth::{AuthAppState, PgAdminRepository, TokenService};
use question::{PgQuestionRepository, QuestionAppState, QuestionConfig};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,question=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    kernel::error::conversions::set_expose_internal_details(config.mode.is_development());
    tracing::info!(mode = config.mode.as_str(), "Configuration loaded");

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let admin_repo = PgAdminRepository::new(pool.clone());

    // Seed failures are logged; the server still starts
    match config.seed {
        Some(creds) => {
            let seed = SeedAdminUseCase::new(Arc::new(admin_repo.clone()));
            match seed.execute(creds.into()).await {
                Ok(SeedOutcome::Created) => tracing::info!("Bootstrap admin seeded"),
                Ok(SeedOutcome::AlreadyExists) => {}
                Err(e) => tracing::error!(error = %e, "Admin seed failed, continuing anyway"),
            }
        }
        None => tracing::warn!("ADMIN_EMAIL or ADMIN_PASSWORD not set, skipping admin seed"),
    }

    let auth_state = AuthAppState::new(admin_repo, TokenService::new(&config.auth));
    let question_state = QuestionAppState::new(
        PgQuestionRepository::new(pool.clone()),
        QuestionConfig::default(),
    );

    let app = routes::app(auth_state, question_state, &config.frontend_origins);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
