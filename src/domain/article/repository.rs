// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleListing, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleStatus};
use crate::domain::article::version::{ArticleVersion, ArticleVersionListing};
use crate::domain::errors::DomainResult;
use crate::domain::menu::MenuItemId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Filters understood by the admin article listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub menu_item_id: Option<MenuItemId>,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Bump the view counter and return the new value.
    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<i64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleListing>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleListing>>;
    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool>;
    async fn list(&self, filter: ArticleFilter) -> DomainResult<Vec<ArticleListing>>;
    async fn list_published_page(
        &self,
        menu_item_id: Option<MenuItemId>,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<ArticleListing>>;
    async fn count_published(&self, menu_item_id: Option<MenuItemId>) -> DomainResult<u64>;
    async fn count_by_menu_item(&self, menu_item_id: MenuItemId) -> DomainResult<u64>;
}

/// Snapshot to be appended; the version number is allocated by the store as
/// `max(version) + 1` for the article.
#[derive(Debug, Clone)]
pub struct NewArticleVersion {
    pub article_id: ArticleId,
    pub title: String,
    pub body: String,
    pub excerpt: Option<String>,
    pub edited_by: Option<UserId>,
    pub change_summary: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

#[async_trait]
pub trait ArticleVersionRepository: Send + Sync {
    async fn append(&self, snapshot: NewArticleVersion) -> DomainResult<ArticleVersion>;
    async fn list_by_article(
        &self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<ArticleVersionListing>>;
    async fn find(
        &self,
        article_id: ArticleId,
        version: i32,
    ) -> DomainResult<Option<ArticleVersionListing>>;
}
