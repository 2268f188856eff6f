mod common;

use common::*;
use newsroom::services::{PageBody, PageService};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer) -> PageService {
    PageService::new(client_for(server), config_for(server).site)
}

#[tokio::test]
async fn article_page_has_meta_and_tags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/fed-policy/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_json("fed-policy")))
        .mount(&server)
        .await;

    let page = service(&server).resolve("/article/fed-policy").await.unwrap();
    assert_eq!(page.meta.title, "Story fed-policy | The Central Report");
    assert!(page.meta.structured_data.is_some());

    let PageBody::Article { article, tags } = page.body else {
        panic!("expected article body");
    };
    assert_eq!(article.slug, "fed-policy");
    assert_eq!(tags[0].name, "economy");
}

#[tokio::test]
async fn missing_article_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/nope/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = service(&server).resolve("/article/nope").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn category_page_paginates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/business/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_json("business")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/articles/"))
        .and(query_param("category", "business"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_page(&["a", "b"], 25)))
        .mount(&server)
        .await;

    let page = service(&server)
        .resolve("/category/business?page=2")
        .await
        .unwrap();
    let PageBody::Category {
        articles,
        pagination,
        ..
    } = page.body
    else {
        panic!("expected category body");
    };
    assert_eq!(articles.len(), 2);

    let links = pagination.unwrap();
    assert_eq!(links.pagination.page_count, 3);
    assert_eq!(links.previous.as_deref(), Some("/category/business"));
    assert_eq!(links.next.as_deref(), Some("/category/business?page=3"));
}

#[tokio::test]
async fn category_articles_failure_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/business/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_json("business")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/articles/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let page = service(&server).resolve("/category/business").await.unwrap();
    let PageBody::Category {
        articles,
        pagination,
        ..
    } = page.body
    else {
        panic!("expected category body");
    };
    assert!(articles.is_empty());
    assert!(pagination.is_none());
}

#[tokio::test]
async fn unreachable_category_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/business/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = service(&server).resolve("/category/business").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn empty_tag_is_not_found_on_first_page_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/"))
        .and(query_param("tag", "quiet-topic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_page(&[], 0)))
        .mount(&server)
        .await;

    let service = service(&server);
    let err = service.resolve("/tag/quiet-topic").await.unwrap_err();
    assert!(err.is_not_found());

    let page = service.resolve("/tag/quiet-topic?page=3").await.unwrap();
    let PageBody::Tag { tag, articles, .. } = page.body else {
        panic!("expected tag body");
    };
    assert_eq!(tag.name, "quiet topic");
    assert!(articles.is_empty());
}

#[tokio::test]
async fn empty_search_does_not_query_articles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([category_json("business")])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/articles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_page(&["x"], 1)))
        .expect(0)
        .mount(&server)
        .await;

    let page = service(&server).resolve("/search?q=%20").await.unwrap();
    let PageBody::Search {
        total, categories, ..
    } = page.body
    else {
        panic!("expected search body");
    };
    assert_eq!(total, 0);
    assert_eq!(categories.len(), 1);
}

#[tokio::test]
async fn search_forwards_term_category_and_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/articles/"))
        .and(query_param("search", "fed rates"))
        .and(query_param("category", "business"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_page(&["x"], 30)))
        .expect(1)
        .mount(&server)
        .await;

    let page = service(&server)
        .resolve("/search?q=fed+rates&category=business&page=2")
        .await
        .unwrap();
    let PageBody::Search {
        query, pagination, ..
    } = page.body
    else {
        panic!("expected search body");
    };
    assert_eq!(query.q, "fed rates");

    let links = pagination.unwrap();
    assert_eq!(
        links.next.as_deref(),
        Some("/search?q=fed+rates&category=business&page=3")
    );
    assert_eq!(
        links.previous.as_deref(),
        Some("/search?q=fed+rates&category=business")
    );
}

#[tokio::test]
async fn author_page_and_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/authors/sarah-johnson/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(author_json("sarah-johnson")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/authors/sarah-johnson/articles/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = service(&server);
    let page = service.resolve("/author/sarah-johnson").await.unwrap();
    assert_eq!(page.meta.description, "Senior Economics Reporter");
    let PageBody::Author { author, articles } = page.body else {
        panic!("expected author body");
    };
    assert_eq!(author.slug, "sarah-johnson");
    assert!(articles.is_empty());

    let err = service.resolve("/author/unknown").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn home_page_survives_api_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/homepage/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let page = service(&server).resolve("/").await.unwrap();
    assert_eq!(
        page.body,
        PageBody::Home {
            featured: vec![],
            breaking: vec![],
            sections: vec![],
        }
    );
}
