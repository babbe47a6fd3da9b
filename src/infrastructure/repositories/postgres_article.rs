// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticleListing, ArticleReadRepository,
    ArticleSlug, ArticleStatus, ArticleTitle, ArticleUpdate, ArticleVersion,
    ArticleVersionListing, ArticleVersionRepository, ArticleWriteRepository, NewArticle,
    NewArticleVersion,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::menu::MenuItemId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ARTICLE_COLUMNS: &str = "id, title, slug, body, excerpt, status, \
     responsible_person, menu_item_id, author_id, view_count, \
     published_at, created_at, updated_at";

const LISTING_SELECT: &str = "SELECT a.id, a.title, a.slug, a.body, a.excerpt, a.status, \
     a.responsible_person, a.menu_item_id, a.author_id, a.view_count, \
     a.published_at, a.created_at, a.updated_at, \
     u.username AS author_username, \
     NULLIF(TRIM(CONCAT(u.first_name, ' ', u.last_name)), '') AS author_full_name, \
     m.title AS category \
     FROM articles a \
     LEFT JOIN users u ON u.id = a.author_id \
     LEFT JOIN menu_items m ON m.id = a.menu_item_id";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    excerpt: Option<String>,
    status: String,
    responsible_person: Option<String>,
    menu_item_id: Option<i64>,
    author_id: i64,
    view_count: i64,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            body: ArticleBody::new(row.body)?,
            excerpt: row.excerpt,
            status: row.status.parse::<ArticleStatus>()?,
            responsible_person: row.responsible_person,
            menu_item_id: row.menu_item_id.map(MenuItemId::new).transpose()?,
            author_id: UserId::new(row.author_id)?,
            view_count: row.view_count,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleListingRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    author_username: Option<String>,
    author_full_name: Option<String>,
    category: Option<String>,
}

impl TryFrom<ArticleListingRow> for ArticleListing {
    type Error = DomainError;

    fn try_from(row: ArticleListingRow) -> Result<Self, Self::Error> {
        Ok(ArticleListing {
            article: Article::try_from(row.article)?,
            author_username: row.author_username,
            author_full_name: row.author_full_name,
            category: row.category,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles \
             (title, slug, body, excerpt, status, responsible_person, menu_item_id, \
              author_id, view_count, published_at, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 0, $9, $10, $11) \
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(article.title.as_str())
        .bind(article.slug.as_str())
        .bind(article.body.as_str())
        .bind(article.excerpt.as_deref())
        .bind(article.status.as_str())
        .bind(article.responsible_person.as_deref())
        .bind(article.menu_item_id.map(i64::from))
        .bind(i64::from(article.author_id))
        .bind(article.published_at)
        .bind(article.created_at)
        .bind(article.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET \
             title = $2, slug = $3, body = $4, excerpt = $5, status = $6, \
             responsible_person = $7, menu_item_id = $8, published_at = $9, updated_at = $10 \
             WHERE id = $1 \
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(i64::from(update.id))
        .bind(update.title.as_str())
        .bind(update.slug.as_str())
        .bind(update.body.as_str())
        .bind(update.excerpt.as_deref())
        .bind(update.status.as_str())
        .bind(update.responsible_person.as_deref())
        .bind(update.menu_item_id.map(i64::from))
        .bind(update.published_at)
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<i64> {
        let (view_count,): (i64,) = sqlx::query_as(
            "UPDATE articles SET view_count = view_count + 1 WHERE id = $1 RETURNING view_count",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Ok(view_count)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleListing>> {
        let row = sqlx::query_as::<_, ArticleListingRow>(&format!(
            "{LISTING_SELECT} WHERE a.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleListing::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleListing>> {
        let row = sqlx::query_as::<_, ArticleListingRow>(&format!(
            "{LISTING_SELECT} WHERE a.slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleListing::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM articles WHERE slug = $1)")
                .bind(slug.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(exists)
    }

    async fn list(&self, filter: ArticleFilter) -> DomainResult<Vec<ArticleListing>> {
        let rows = sqlx::query_as::<_, ArticleListingRow>(&format!(
            "{LISTING_SELECT} \
             WHERE ($1::text IS NULL OR a.status = $1) \
               AND ($2::bigint IS NULL OR a.menu_item_id = $2) \
             ORDER BY a.updated_at DESC"
        ))
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.menu_item_id.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleListing::try_from).collect()
    }

    async fn list_published_page(
        &self,
        menu_item_id: Option<MenuItemId>,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<ArticleListing>> {
        let rows = sqlx::query_as::<_, ArticleListingRow>(&format!(
            "{LISTING_SELECT} \
             WHERE a.status = 'published' \
               AND ($1::bigint IS NULL OR a.menu_item_id = $1) \
             ORDER BY a.published_at DESC NULLS LAST, a.created_at DESC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(menu_item_id.map(i64::from))
        .bind(i64::from(limit))
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleListing::try_from).collect()
    }

    async fn count_published(&self, menu_item_id: Option<MenuItemId>) -> DomainResult<u64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM articles \
             WHERE status = 'published' AND ($1::bigint IS NULL OR menu_item_id = $1)",
        )
        .bind(menu_item_id.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(count as u64)
    }

    async fn count_by_menu_item(&self, menu_item_id: MenuItemId) -> DomainResult<u64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM articles WHERE menu_item_id = $1")
                .bind(i64::from(menu_item_id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(count as u64)
    }
}

#[derive(Debug, FromRow)]
struct VersionRow {
    article_id: i64,
    version: i32,
    title: String,
    body: String,
    excerpt: Option<String>,
    edited_by: Option<i64>,
    change_summary: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<VersionRow> for ArticleVersion {
    type Error = DomainError;

    fn try_from(row: VersionRow) -> Result<Self, Self::Error> {
        Ok(ArticleVersion {
            article_id: ArticleId::new(row.article_id)?,
            version: row.version,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            excerpt: row.excerpt,
            edited_by: row.edited_by.map(UserId::new).transpose()?,
            change_summary: row.change_summary,
            recorded_at: row.recorded_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct VersionListingRow {
    #[sqlx(flatten)]
    version: VersionRow,
    edited_by_username: Option<String>,
}

impl TryFrom<VersionListingRow> for ArticleVersionListing {
    type Error = DomainError;

    fn try_from(row: VersionListingRow) -> Result<Self, Self::Error> {
        Ok(ArticleVersionListing {
            version: ArticleVersion::try_from(row.version)?,
            edited_by_username: row.edited_by_username,
        })
    }
}

#[derive(Clone)]
pub struct PostgresArticleVersionRepository {
    pool: PgPool,
}

impl PostgresArticleVersionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleVersionRepository for PostgresArticleVersionRepository {
    async fn append(&self, snapshot: NewArticleVersion) -> DomainResult<ArticleVersion> {
        // Version numbers are allocated inside the statement so concurrent
        // saves of the same article cannot race to the same number.
        let row = sqlx::query_as::<_, VersionRow>(
            "WITH next_version AS (
                 SELECT COALESCE(MAX(version) + 1, 1) AS version
                 FROM article_versions
                 WHERE article_id = $1
             )
             INSERT INTO article_versions
                 (article_id, version, title, body, excerpt, edited_by, change_summary, recorded_at)
             SELECT $1, next_version.version, $2, $3, $4, $5, $6, $7
             FROM next_version
             RETURNING article_id, version, title, body, excerpt, edited_by, change_summary, recorded_at",
        )
        .bind(i64::from(snapshot.article_id))
        .bind(&snapshot.title)
        .bind(&snapshot.body)
        .bind(snapshot.excerpt.as_deref())
        .bind(snapshot.edited_by.map(i64::from))
        .bind(snapshot.change_summary.as_deref())
        .bind(snapshot.recorded_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ArticleVersion::try_from(row)
    }

    async fn list_by_article(
        &self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<ArticleVersionListing>> {
        let rows = sqlx::query_as::<_, VersionListingRow>(
            "SELECT v.article_id, v.version, v.title, v.body, v.excerpt, v.edited_by, \
                    v.change_summary, v.recorded_at, u.username AS edited_by_username \
             FROM article_versions v \
             LEFT JOIN users u ON u.id = v.edited_by \
             WHERE v.article_id = $1 \
             ORDER BY v.version DESC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(ArticleVersionListing::try_from)
            .collect()
    }

    async fn find(
        &self,
        article_id: ArticleId,
        version: i32,
    ) -> DomainResult<Option<ArticleVersionListing>> {
        let row = sqlx::query_as::<_, VersionListingRow>(
            "SELECT v.article_id, v.version, v.title, v.body, v.excerpt, v.edited_by, \
                    v.change_summary, v.recorded_at, u.username AS edited_by_username \
             FROM article_versions v \
             LEFT JOIN users u ON u.id = v.edited_by \
             WHERE v.article_id = $1 AND v.version = $2",
        )
        .bind(i64::from(article_id))
        .bind(version)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleVersionListing::try_from).transpose()
    }
}
