// src/application/dto/articles.rs
use crate::domain::article::{Article, ArticleListing, ArticleStatus, ArticleVersionListing};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub excerpt: Option<String>,
    pub status: ArticleStatus,
    pub responsible_person: Option<String>,
    pub menu_item_id: Option<i64>,
    pub author_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub view_count: i64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            body: article.body.into_inner(),
            excerpt: article.excerpt,
            status: article.status,
            responsible_person: article.responsible_person,
            menu_item_id: article.menu_item_id.map(Into::into),
            author_id: article.author_id.into(),
            author_username: None,
            author_name: None,
            category: None,
            view_count: article.view_count,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl From<ArticleListing> for ArticleDto {
    fn from(listing: ArticleListing) -> Self {
        let mut dto = Self::from(listing.article);
        dto.author_username = listing.author_username;
        dto.author_name = listing.author_full_name;
        dto.category = listing.category;
        dto
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleVersionDto {
    pub article_id: i64,
    pub version: i32,
    pub title: String,
    pub body: String,
    pub excerpt: Option<String>,
    pub edited_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_by_username: Option<String>,
    pub change_summary: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl From<ArticleVersionListing> for ArticleVersionDto {
    fn from(listing: ArticleVersionListing) -> Self {
        let version = listing.version;
        Self {
            article_id: version.article_id.into(),
            version: version.version,
            title: version.title.into_inner(),
            body: version.body.into_inner(),
            excerpt: version.excerpt,
            edited_by: version.edited_by.map(Into::into),
            edited_by_username: listing.edited_by_username,
            change_summary: version.change_summary,
            recorded_at: version.recorded_at,
        }
    }
}

/// Page-number pagination metadata as served by the public article listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_articles: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub limit: u32,
}

impl PageMeta {
    pub fn new(current_page: u32, limit: u32, total_articles: u64) -> Self {
        let total_pages = if total_articles == 0 {
            0
        } else {
            total_articles.div_ceil(u64::from(limit)) as u32
        };
        Self {
            current_page,
            total_pages,
            total_articles,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
            limit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicArticlePage {
    pub articles: Vec<ArticleDto>,
    pub pagination: PageMeta,
}

/// A published article together with its version history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicArticleView {
    pub article: ArticleDto,
    pub versions: Vec<ArticleVersionDto>,
}
