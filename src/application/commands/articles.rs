// src/application/commands/articles.rs
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
    ports::{time::Clock, util::SlugGenerator},
};
use crate::domain::article::{
    ArticleBody, ArticleId, ArticleReadRepository, ArticleSlug, ArticleStatus, ArticleTitle,
    ArticleUpdate, ArticleVersionRepository, ArticleWriteRepository, NewArticle,
    NewArticleVersion,
};
use crate::domain::menu::MenuItemId;
use std::sync::Arc;

pub struct CreateArticleCommand {
    pub title: String,
    pub slug: Option<String>,
    pub body: String,
    pub excerpt: Option<String>,
    pub status: ArticleStatus,
    pub responsible_person: Option<String>,
    pub menu_item_id: Option<i64>,
}

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub body: String,
    pub excerpt: Option<String>,
    pub status: ArticleStatus,
    pub responsible_person: Option<String>,
    pub menu_item_id: Option<i64>,
    pub change_summary: Option<String>,
}

pub struct ArticleCommandService {
    write_repo: Arc<dyn ArticleWriteRepository>,
    read_repo: Arc<dyn ArticleReadRepository>,
    version_repo: Arc<dyn ArticleVersionRepository>,
    slugger: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        version_repo: Arc<dyn ArticleVersionRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            version_repo,
            slugger,
            clock,
        }
    }

    /// Insert the article and record version 1 in the same operation.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let slug = self.resolve_slug(command.slug, &title).await?;
        let menu_item_id = command.menu_item_id.map(MenuItemId::new).transpose()?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            slug,
            body,
            excerpt: command.excerpt,
            status: command.status,
            responsible_person: command.responsible_person,
            menu_item_id,
            author_id: actor.id,
            published_at: command.status.is_published().then_some(now),
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;

        self.version_repo
            .append(NewArticleVersion {
                article_id: created.id,
                title: created.title.as_str().to_owned(),
                body: created.body.as_str().to_owned(),
                excerpt: created.excerpt.clone(),
                edited_by: Some(actor.id),
                change_summary: Some("Initial version".into()),
                recorded_at: now,
            })
            .await?;

        tracing::info!(article = %created.slug, by = %actor.username, "article created");
        Ok(created.into())
    }

    /// Full update of editable fields plus a new version snapshot.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?
            .article;

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let slug = match command.slug {
            Some(slug) => ArticleSlug::new(slug)?,
            None => existing.slug.clone(),
        };
        let menu_item_id = command.menu_item_id.map(MenuItemId::new).transpose()?;
        let now = self.clock.now();

        // Stamped on first publish, preserved afterwards.
        let published_at = if command.status.is_published() {
            existing.published_at.or(Some(now))
        } else {
            existing.published_at
        };

        let update = ArticleUpdate {
            id,
            title,
            slug,
            body,
            excerpt: command.excerpt,
            status: command.status,
            responsible_person: command.responsible_person,
            menu_item_id,
            published_at,
            updated_at: now,
        };

        let updated = self.write_repo.update(update).await?;

        self.version_repo
            .append(NewArticleVersion {
                article_id: updated.id,
                title: updated.title.as_str().to_owned(),
                body: updated.body.as_str().to_owned(),
                excerpt: updated.excerpt.clone(),
                edited_by: Some(actor.id),
                change_summary: Some(
                    command
                        .change_summary
                        .filter(|s| !s.trim().is_empty())
                        .unwrap_or_else(|| "Article updated".into()),
                ),
                recorded_at: now,
            })
            .await?;

        Ok(updated.into())
    }

    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(article_id = i64::from(id), by = %actor.username, "article deleted");
        Ok(())
    }

    /// Bump the view counter of a published article, looked up by slug.
    pub async fn record_view(&self, slug: &str) -> ApplicationResult<i64> {
        let slug = ArticleSlug::new(slug)?;
        let listing = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|listing| listing.article.status.is_published())
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        Ok(self
            .write_repo
            .increment_view_count(listing.article.id)
            .await?)
    }

    async fn resolve_slug(
        &self,
        requested: Option<String>,
        title: &ArticleTitle,
    ) -> ApplicationResult<ArticleSlug> {
        let raw = match requested.filter(|s| !s.trim().is_empty()) {
            Some(slug) => slug,
            None => self.slugger.slugify(title.as_str()),
        };
        let slug = ArticleSlug::new(raw)?;
        if self.read_repo.slug_exists(&slug).await? {
            return Err(ApplicationError::conflict("slug already exists"));
        }
        Ok(slug)
    }
}
