use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::models::render_xml;
use crate::services::{Freshness, SitemapAggregator};
use crate::server::AppState;

/// `Cache-Control` value for downstream caches.
fn cache_control(freshness: Freshness) -> String {
    let secs = freshness.revalidate().as_secs();
    format!("public, s-maxage={secs}, stale-while-revalidate={secs}")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        let body = json!({ "error": self.to_string(), "status": status.as_u16() });
        (status, Json(body)).into_response()
    }
}

/// GET /sitemap.xml
pub async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let outcome = SitemapAggregator::new(state.client.clone(), &state.config)
        .build()
        .await;
    tracing::info!(
        "sitemap: {} entries ({} dynamic)",
        outcome.entries.len(),
        outcome.dynamic_count()
    );

    let headers = [
        (header::CONTENT_TYPE, "application/xml; charset=utf-8".to_string()),
        (header::CACHE_CONTROL, cache_control(Freshness::Listing)),
    ];
    (StatusCode::OK, headers, render_xml(&outcome.entries)).into_response()
}

/// GET /robots.txt
pub async fn robots_txt(State(state): State<AppState>) -> Response {
    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (header::CACHE_CONTROL, cache_control(Freshness::Static)),
    ];
    (StatusCode::OK, headers, state.robots.as_str().to_string()).into_response()
}

/// GET /healthz
pub async fn healthz() -> &'static str {
    "ok"
}

/// Every other path: resolved page data.
pub async fn page(State(state): State<AppState>, uri: Uri) -> Response {
    let target = uri.path_and_query().map_or("/", |pq| pq.as_str());
    match state.pages.resolve(target).await {
        Ok(page) => {
            let headers = [(header::CACHE_CONTROL, cache_control(page.freshness))];
            (StatusCode::OK, headers, Json(page)).into_response()
        }
        Err(e) if e.is_not_found() => {
            let body = json!({
                "error": e.to_string(),
                "status": StatusCode::NOT_FOUND.as_u16(),
                "meta": state.pages.not_found_meta(target),
            });
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
