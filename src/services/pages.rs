// src/services/pages.rs

//! Page resolution.
//!
//! Turns a request path into the data a page template needs. Section fetches
//! degrade to empty lists on failure; only a missing primary entity (article,
//! category, author, or a tag with no articles at all) makes the page
//! not found.

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{Article, Author, Category, Route, SiteConfig, StaticPage, Tag};
use crate::services::content::{ArticleQuery, ContentClient, Fallback, Freshness};
use crate::services::seo::{PageMeta, SeoBuilder};
use crate::utils::pagination::Pagination;
use crate::utils::url::{SearchQuery, page_href};

/// Latest articles of one category on the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeSection {
    pub category: String,
    pub articles: Vec<Article>,
}

/// A numbered pagination link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: u64,
    pub href: String,
    pub current: bool,
}

/// Pagination controls of a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub pages: Vec<PageLink>,
}

impl PageLinks {
    /// Controls for `pagination`, or `None` when there is at most one page.
    pub fn build(pagination: Pagination, href: impl Fn(u64) -> String) -> Option<Self> {
        if !pagination.is_visible() {
            return None;
        }

        Some(Self {
            previous: pagination
                .has_previous()
                .then(|| href(pagination.current - 1)),
            next: pagination.has_next().then(|| href(pagination.current + 1)),
            pages: pagination
                .pages()
                .map(|number| PageLink {
                    number,
                    href: href(number),
                    current: number == pagination.current,
                })
                .collect(),
            pagination,
        })
    }
}

/// Route-specific page content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    Home {
        featured: Vec<Article>,
        breaking: Vec<Article>,
        sections: Vec<HomeSection>,
    },
    Article {
        article: Article,
        tags: Vec<Tag>,
    },
    Category {
        category: Category,
        articles: Vec<Article>,
        pagination: Option<PageLinks>,
    },
    Author {
        author: Author,
        articles: Vec<Article>,
    },
    Tag {
        tag: Tag,
        articles: Vec<Article>,
        pagination: Option<PageLinks>,
    },
    Search {
        query: SearchQuery,
        total: u64,
        articles: Vec<Article>,
        categories: Vec<Category>,
        pagination: Option<PageLinks>,
    },
    Static {
        page: StaticPage,
    },
}

/// A fully resolved page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub meta: PageMeta,
    pub body: PageBody,
    pub freshness: Freshness,
}

/// Resolves routes into pages using the content API.
#[derive(Debug, Clone)]
pub struct PageService {
    client: ContentClient,
    seo: SeoBuilder,
}

impl PageService {
    pub fn new(client: ContentClient, site: SiteConfig) -> Self {
        Self {
            client,
            seo: SeoBuilder::new(site),
        }
    }

    pub fn seo(&self) -> &SeoBuilder {
        &self.seo
    }

    /// Metadata for a target that resolved to not found.
    pub fn not_found_meta(&self, target: &str) -> PageMeta {
        let what = match Route::parse(target) {
            Route::Article { .. } => "Article",
            Route::Category { .. } => "Category",
            Route::Author { .. } => "Author",
            Route::Tag { .. } => "Tag",
            _ => "Page",
        };
        self.seo.not_found(what)
    }

    /// Resolve a request target such as `/category/world?page=2`.
    pub async fn resolve(&self, target: &str) -> Result<Page> {
        match Route::parse(target) {
            Route::NotFound => Err(AppError::not_found(format!("page '{target}'"))),
            route => self.render(&route).await,
        }
    }

    /// Build the page for an already parsed route.
    pub async fn render(&self, route: &Route) -> Result<Page> {
        match route {
            Route::Home => Ok(self.home().await),
            Route::Article { slug } => self.article(slug).await,
            Route::Category { slug, page } => self.category(slug, *page).await,
            Route::Author { slug } => self.author(slug).await,
            Route::Tag { slug, page } => self.tag(slug, *page).await,
            Route::Search(query) => Ok(self.search(query).await),
            Route::Static(page) => Ok(self.static_page(*page)),
            Route::Sitemap | Route::Robots => Err(AppError::validation(
                "sitemap.xml and robots.txt are documents, not pages",
            )),
            Route::NotFound => Err(AppError::not_found("page")),
        }
    }

    async fn home(&self) -> Page {
        let homepage = self.client.homepage().await.or_empty("homepage");
        let sections = homepage
            .category_articles
            .into_iter()
            .filter(|(_, articles)| !articles.is_empty())
            .map(|(category, articles)| HomeSection { category, articles })
            .collect();

        Page {
            meta: self.seo.home(),
            body: PageBody::Home {
                featured: homepage.featured_articles,
                breaking: homepage.breaking_news,
                sections,
            },
            freshness: Freshness::Listing,
        }
    }

    async fn article(&self, slug: &str) -> Result<Page> {
        let article = self
            .client
            .article(slug)
            .await
            .found("article")
            .ok_or_else(|| AppError::not_found(format!("article '{slug}'")))?;

        Ok(Page {
            meta: self.seo.article(&article),
            body: PageBody::Article {
                tags: article.tags.iter().map(|t| Tag::from_slug(t)).collect(),
                article,
            },
            freshness: Freshness::Listing,
        })
    }

    async fn category(&self, slug: &str, page: u64) -> Result<Page> {
        let category = self
            .client
            .category(slug)
            .await
            .found("category")
            .ok_or_else(|| AppError::not_found(format!("category '{slug}'")))?;

        let listing = self
            .client
            .articles(&ArticleQuery::default().category(slug).page(page))
            .await
            .or_empty("category articles");
        let path = category.path();
        let pagination = PageLinks::build(Pagination::new(page, listing.count), |n| {
            page_href(&path, n)
        });

        let description = if category.description.trim().is_empty() {
            format!("Latest {} news", category.name)
        } else {
            category.description.clone()
        };

        Ok(Page {
            meta: self.seo.page(&category.name, &description, &path),
            body: PageBody::Category {
                category,
                articles: listing.results,
                pagination,
            },
            freshness: Freshness::Listing,
        })
    }

    async fn author(&self, slug: &str) -> Result<Page> {
        let author = self
            .client
            .author(slug)
            .await
            .found("author")
            .ok_or_else(|| AppError::not_found(format!("author '{slug}'")))?;

        let articles = self
            .client
            .author_articles(slug)
            .await
            .or_empty("author articles")
            .results;

        Ok(Page {
            meta: self.seo.author(&author),
            body: PageBody::Author { author, articles },
            freshness: Freshness::Profile,
        })
    }

    async fn tag(&self, slug: &str, page: u64) -> Result<Page> {
        let tag = Tag::from_slug(slug);
        let listing = self
            .client
            .articles(&ArticleQuery::default().tag(slug).page(page))
            .await
            .or_empty("tag articles");

        if listing.is_empty() && page == 1 {
            return Err(AppError::not_found(format!("tag '{slug}'")));
        }

        let path = tag.path();
        let pagination = PageLinks::build(Pagination::new(page, listing.count), |n| {
            page_href(&path, n)
        });

        Ok(Page {
            meta: self.seo.page(
                &format!("#{}", tag.name),
                &format!("Articles tagged with {}", tag.name),
                &path,
            ),
            body: PageBody::Tag {
                tag,
                articles: listing.results,
                pagination,
            },
            freshness: Freshness::Listing,
        })
    }

    async fn search(&self, query: &SearchQuery) -> Page {
        let categories = self.client.categories().await.or_empty("categories");

        let listing = if query.is_empty() {
            Default::default()
        } else {
            let mut filter = ArticleQuery::default().search(&query.q).page(query.page);
            filter.category = query.category.clone();
            self.client.articles(&filter).await.or_empty("search results")
        };

        let pagination = PageLinks::build(Pagination::new(query.page, listing.count), |n| {
            query.page_href(n)
        });
        let title = if query.is_empty() {
            "Search".to_string()
        } else {
            format!("Search results for \"{}\"", query.q)
        };

        Page {
            meta: self.seo.page(
                &title,
                "Search articles across every section.",
                &query.href(),
            ),
            body: PageBody::Search {
                query: query.clone(),
                total: listing.count,
                articles: listing.results,
                categories,
                pagination,
            },
            freshness: Freshness::Listing,
        }
    }

    fn static_page(&self, page: StaticPage) -> Page {
        Page {
            meta: self.seo.page(page.title(), page.description(), page.path()),
            body: PageBody::Static { page },
            freshness: Freshness::Static,
        }
    }
}
