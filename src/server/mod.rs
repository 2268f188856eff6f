//! HTTP surface of the site data.
//!
//! - `GET /sitemap.xml`: sitemap built from the content API on each request
//! - `GET /robots.txt`: robots policy
//! - `GET /healthz`: liveness probe
//! - anything else: page data as JSON, 404 for unknown pages

mod handlers;
mod state;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

pub use state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/sitemap.xml", get(handlers::sitemap_xml))
        .route("/robots.txt", get(handlers::robots_txt))
        .route("/healthz", get(handlers::healthz))
        .fallback(handlers::page)
        .with_state(state)
        .layer(cors)
}
