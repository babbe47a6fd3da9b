// src/application/queries/articles.rs
use crate::application::{
    dto::{ArticleDto, ArticleVersionDto, PageMeta, PublicArticlePage, PublicArticleView},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::{
    ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleStatus,
    ArticleVersionRepository, ArticleWriteRepository,
};
use crate::domain::menu::MenuItemId;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct AdminListQuery {
    pub status: Option<ArticleStatus>,
    pub menu_item_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct PublicListQuery {
    pub page: u32,
    pub limit: u32,
    pub menu_item_id: Option<i64>,
}

pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
    version_repo: Arc<dyn ArticleVersionRepository>,
    // The public by-slug view bumps the article's view counter in place.
    write_repo: Arc<dyn ArticleWriteRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        version_repo: Arc<dyn ArticleVersionRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
    ) -> Self {
        Self {
            read_repo,
            version_repo,
            write_repo,
        }
    }

    pub async fn admin_list(&self, query: AdminListQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let filter = ArticleFilter {
            status: query.status,
            menu_item_id: query.menu_item_id.map(MenuItemId::new).transpose()?,
        };
        let listings = self.read_repo.list(filter).await?;
        Ok(listings.into_iter().map(Into::into).collect())
    }

    pub async fn admin_get(&self, id: i64) -> ApplicationResult<ArticleDto> {
        let listing = self
            .read_repo
            .find_by_id(ArticleId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(listing.into())
    }

    pub async fn list_versions(&self, article_id: i64) -> ApplicationResult<Vec<ArticleVersionDto>> {
        let versions = self
            .version_repo
            .list_by_article(ArticleId::new(article_id)?)
            .await?;
        Ok(versions.into_iter().map(Into::into).collect())
    }

    pub async fn get_version(
        &self,
        article_id: i64,
        version: i32,
    ) -> ApplicationResult<ArticleVersionDto> {
        let listing = self
            .version_repo
            .find(ArticleId::new(article_id)?, version)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article version not found"))?;
        Ok(listing.into())
    }

    /// Published articles, newest first, with page-number pagination.
    pub async fn public_list(&self, query: PublicListQuery) -> ApplicationResult<PublicArticlePage> {
        let limit = query.limit.clamp(1, 100);
        let page = query.page.max(1);
        let offset = u64::from(page - 1) * u64::from(limit);
        let menu_item_id = query.menu_item_id.map(MenuItemId::new).transpose()?;

        let total = self.read_repo.count_published(menu_item_id).await?;
        let listings = self
            .read_repo
            .list_published_page(menu_item_id, limit, offset)
            .await?;

        Ok(PublicArticlePage {
            articles: listings.into_iter().map(Into::into).collect(),
            pagination: PageMeta::new(page, limit, total),
        })
    }

    /// Published article by slug. Bumps the view counter and returns the
    /// incremented value along with the version history.
    pub async fn public_get_by_slug(&self, slug: &str) -> ApplicationResult<PublicArticleView> {
        let slug = ArticleSlug::new(slug)?;
        let listing = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|listing| listing.article.status.is_published())
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let view_count = self
            .write_repo
            .increment_view_count(listing.article.id)
            .await?;
        let versions = self.version_repo.list_by_article(listing.article.id).await?;

        let mut article: ArticleDto = listing.into();
        article.view_count = view_count;

        Ok(PublicArticleView {
            article,
            versions: versions.into_iter().map(Into::into).collect(),
        })
    }
}
