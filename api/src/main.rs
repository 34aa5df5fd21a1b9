mod handlers;
mod models;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, patch},
    Router,
};
use common::db;
use common::settings::Settings;
use common::Services;
use sea_orm::DatabaseConnection;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub services: Services,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::new()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "api=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = Arc::new(db::establish_connection(&settings.database.url).await?);
    let repos = common::build_repositories(db.clone());
    let services = common::build_services(&repos);
    let state = Arc::new(AppState { db, services });

    let app = app(state, &settings);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!("listening on {}", addr);
    tracing::info!("serving client assets from {}", settings.frontend.assets_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the full router: the JSON API under `/api`, a health probe, and
/// the static single-page client for everything else.
pub fn app(state: Arc<AppState>, settings: &Settings) -> Router {
    let cors = build_cors(settings);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route("/api/tasks/schema", get(handlers::task_schema))
        .route(
            "/api/tasks/:id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route("/api/tasks/:id/complete", patch(handlers::complete_task))
        .fallback_service(ServeDir::new(&settings.frontend.assets_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn build_cors(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .frontend
        .origin_list()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    match (settings.debug, origins.is_empty()) {
        (false, false) => CorsLayer::new()
            .allow_origin(origins)
            .allow_credentials(true)
            .allow_headers([axum::http::header::CONTENT_TYPE])
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ]),
        _ => CorsLayer::permissive(),
    }
}
