mod common;

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use common::*;
use newsroom::models::{ChangeFrequency, render_xml};
use newsroom::services::sitemap::{Feed, FeedStatus};
use newsroom::services::{SitemapAggregator, SitemapOutcome};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED_TIMEOUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    Ok,
    Error,
    Reject,
}

fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
}

fn articles_body() -> Value {
    json!({
        "count": 3,
        "results": [
            {"slug": "fed-policy", "published_date": "2024-01-15T10:30:00Z"},
            {"slug": "undated"},
            {"title": "no slug"}
        ]
    })
}

fn categories_body() -> Value {
    json!([{"slug": "business"}, {"slug": "world"}])
}

fn authors_body() -> Value {
    json!({"results": [{"slug": "sarah-johnson"}]})
}

fn respond(outcome: Outcome, body: Value) -> ResponseTemplate {
    match outcome {
        Outcome::Ok => ResponseTemplate::new(200).set_body_json(body),
        Outcome::Error => ResponseTemplate::new(503),
        Outcome::Reject => ResponseTemplate::new(200)
            .set_body_json(body)
            .set_delay(FEED_TIMEOUT * 10),
    }
}

async fn build(articles: Outcome, categories: Outcome, authors: Outcome) -> SitemapOutcome {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/"))
        .and(query_param("limit", "1000"))
        .respond_with(respond(articles, articles_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories/"))
        .respond_with(respond(categories, categories_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/authors/"))
        .respond_with(respond(authors, authors_body()))
        .mount(&server)
        .await;

    SitemapAggregator::new(client_for(&server), &config_for(&server))
        .with_feed_timeout(FEED_TIMEOUT)
        .build_at(generated_at())
        .await
}

fn locs(outcome: &SitemapOutcome) -> Vec<&str> {
    outcome.entries.iter().map(|e| e.loc.as_str()).collect()
}

fn expected_status(outcome: Outcome) -> FeedStatus {
    match outcome {
        Outcome::Ok => FeedStatus::Ok,
        Outcome::Error => FeedStatus::Error(503),
        Outcome::Reject => FeedStatus::Rejected,
    }
}

#[tokio::test]
async fn every_outcome_combination_keeps_static_routes() {
    use Outcome::*;

    for articles in [Ok, Error, Reject] {
        for categories in [Ok, Error, Reject] {
            for authors in [Ok, Error, Reject] {
                let outcome = build(articles, categories, authors).await;
                let label = format!("{articles:?}/{categories:?}/{authors:?}");

                assert_eq!(outcome.static_count, 6, "{label}");
                assert_eq!(
                    &locs(&outcome)[..6],
                    &[
                        "https://centralsreport.com",
                        "https://centralsreport.com/about",
                        "https://centralsreport.com/contact",
                        "https://centralsreport.com/privacy",
                        "https://centralsreport.com/terms",
                        "https://centralsreport.com/careers",
                    ],
                    "{label}"
                );

                let expected_dynamic = usize::from(articles == Ok) * 2
                    + usize::from(categories == Ok) * 2
                    + usize::from(authors == Ok);
                assert_eq!(outcome.dynamic_count(), expected_dynamic, "{label}");

                let statuses: Vec<FeedStatus> = outcome.feeds.iter().map(|r| r.status).collect();
                assert_eq!(
                    statuses,
                    vec![
                        expected_status(articles),
                        expected_status(categories),
                        expected_status(authors)
                    ],
                    "{label}"
                );
            }
        }
    }
}

#[tokio::test]
async fn rejected_categories_keep_articles_and_authors() {
    let outcome = build(Outcome::Ok, Outcome::Reject, Outcome::Ok).await;

    assert_eq!(outcome.entries.len(), 6 + 2 + 1);
    let dynamic = &locs(&outcome)[6..];
    assert_eq!(
        dynamic,
        &[
            "https://centralsreport.com/article/fed-policy",
            "https://centralsreport.com/article/undated",
            "https://centralsreport.com/author/sarah-johnson",
        ]
    );
    assert!(!dynamic.iter().any(|loc| loc.contains("/category/")));
}

#[tokio::test]
async fn entry_metadata_follows_feed() {
    let outcome = build(Outcome::Ok, Outcome::Ok, Outcome::Ok).await;
    let entry = |loc: &str| {
        outcome
            .entries
            .iter()
            .find(|e| e.loc == format!("https://centralsreport.com{loc}"))
            .unwrap()
    };

    let article = entry("/article/fed-policy");
    assert_eq!(article.change_frequency, ChangeFrequency::Weekly);
    assert_eq!(article.priority, 0.9);
    assert_eq!(
        article.last_modified,
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    );

    assert_eq!(entry("/article/undated").last_modified, generated_at());

    let category = entry("/category/world");
    assert_eq!(category.change_frequency, ChangeFrequency::Daily);
    assert_eq!(category.priority, 0.8);
    assert_eq!(category.last_modified, generated_at());

    let author = entry("/author/sarah-johnson");
    assert_eq!(author.change_frequency, ChangeFrequency::Weekly);
    assert_eq!(author.priority, 0.7);

    let report: Vec<(Feed, usize)> = outcome.feeds.iter().map(|r| (r.feed, r.entries)).collect();
    assert_eq!(
        report,
        vec![(Feed::Articles, 2), (Feed::Categories, 2), (Feed::Authors, 1)]
    );
}

#[tokio::test]
async fn unknown_shape_contributes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("nope")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/authors/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(authors_body()))
        .mount(&server)
        .await;

    let outcome = SitemapAggregator::new(client_for(&server), &config_for(&server))
        .build_at(generated_at())
        .await;

    assert_eq!(outcome.entries.len(), 7);
    assert!(outcome.feeds.iter().all(|r| r.status == FeedStatus::Ok));
}

#[tokio::test]
async fn document_lists_every_entry() {
    let outcome = build(Outcome::Ok, Outcome::Ok, Outcome::Error).await;
    let xml = render_xml(&outcome.entries);

    assert_eq!(xml.matches("<url>").count(), 6 + 2 + 2);
    assert!(xml.contains("<loc>https://centralsreport.com/category/business</loc>"));
    assert!(xml.contains("<lastmod>2024-01-15T10:30:00+00:00</lastmod>"));
    assert!(!xml.contains("/author/"));
}
