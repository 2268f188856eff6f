//! Shared fixtures for integration tests.

#![allow(dead_code)]

use newsroom::models::Config;
use newsroom::services::ContentClient;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Configuration pointing the content API at `server`.
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.base_url = Some(format!("{}/api", server.uri()));
    config
}

pub fn client_for(server: &MockServer) -> ContentClient {
    ContentClient::new(&config_for(server).api).expect("client builds")
}

pub fn author_json(slug: &str) -> Value {
    json!({
        "id": 7,
        "name": "Sarah Johnson",
        "slug": slug,
        "bio": "Senior Economics Reporter",
        "avatar": "/media/authors/sarah.jpg"
    })
}

pub fn category_json(slug: &str) -> Value {
    json!({
        "id": 3,
        "name": "Business",
        "slug": slug,
        "description": "Business and economy news",
        "color": "#3B82F6",
        "order": 1
    })
}

pub fn article_json(slug: &str) -> Value {
    json!({
        "id": 1,
        "title": format!("Story {slug}"),
        "slug": slug,
        "excerpt": "A short summary.",
        "published_date": "2024-01-15T10:30:00Z",
        "created_at": "2024-01-15T10:00:00Z",
        "author": author_json("sarah-johnson"),
        "category": category_json("business"),
        "tags": ["economy"],
        "is_breaking": true,
        "read_time": 4
    })
}

/// An envelope page of `count` total articles holding `slugs`.
pub fn article_page(slugs: &[&str], count: u64) -> Value {
    let results: Vec<Value> = slugs.iter().map(|s| article_json(s)).collect();
    json!({ "count": count, "next": null, "previous": null, "results": results })
}
