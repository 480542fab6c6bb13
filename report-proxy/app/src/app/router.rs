use crate::handler::fallback::api_not_found_handler;
use crate::handler::generate::generate_report_handler;
use crate::handler::health::health_handler;
use crate::service::ReportService;
use axum::Router;
use axum::http::{HeaderName, Method, header};
use axum::routing::{any, get, post};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the `/api` router (health + generate-report + JSON 404).
pub fn api_router(service: ReportService) -> Router {
    Router::new()
        .route(
            "/api/health",
            get(health_handler).fallback(api_not_found_handler),
        )
        .route(
            "/api/generate-report",
            post(generate_report_handler).fallback(api_not_found_handler),
        )
        .route("/api", any(api_not_found_handler))
        .route("/api/{*rest}", any(api_not_found_handler))
        .with_state(service)
}

/// Build the full application: API routes, then the static front end with
/// an `index.html` fallback for client-side routes.
pub fn main_router(service: ReportService, static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    api_router(service)
        .fallback_service(spa)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}
