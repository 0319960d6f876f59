use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{HttpAddressProvider, PgStudentRepository};
use application::StudentService;
use config::Config;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<StudentService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    let repo = Arc::new(PgStudentRepository::new(pool));
    let addresses = Arc::new(HttpAddressProvider::new(
        &config.address_service_url,
        config.address_timeout,
    ));
    let state = AppState {
        students: Arc::new(StudentService::new(repo, addresses)),
    };

    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::students::router())
        .fallback(routes::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Directory service listening");
    axum::serve(listener, router).await?;

    Ok(())
}
