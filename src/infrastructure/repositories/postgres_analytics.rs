// src/infrastructure/repositories/postgres_analytics.rs
use super::map_sqlx;
use crate::application::dto::analytics::{
    ArticleTotals, CategoryStat, MonthlyStat, MostViewedEntry, RecentArticleEntry,
    UserActivityStat,
};
use crate::application::queries::analytics::AnalyticsRepository;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAnalyticsRepository {
    pool: PgPool,
}

impl PostgresAnalyticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TotalsRow {
    total_articles: i64,
    published_articles: i64,
    draft_articles: i64,
    total_views: i64,
    avg_views: f64,
}

#[derive(Debug, FromRow)]
struct MostViewedRow {
    title: String,
    slug: String,
    view_count: i64,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct RecentRow {
    title: String,
    slug: String,
    status: String,
    created_at: DateTime<Utc>,
    author_username: Option<String>,
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    category: String,
    articles: i64,
    total_views: i64,
}

#[derive(Debug, FromRow)]
struct MonthlyRow {
    month: String,
    articles_created: i64,
    articles_published: i64,
}

#[derive(Debug, FromRow)]
struct UserActivityRow {
    username: String,
    articles_created: i64,
    total_views: i64,
    last_activity: Option<DateTime<Utc>>,
}

#[async_trait]
impl AnalyticsRepository for PostgresAnalyticsRepository {
    async fn article_totals(&self) -> DomainResult<ArticleTotals> {
        let row = sqlx::query_as::<_, TotalsRow>(
            "SELECT COUNT(*)::bigint AS total_articles, \
                    COUNT(*) FILTER (WHERE status = 'published')::bigint AS published_articles, \
                    COUNT(*) FILTER (WHERE status = 'draft')::bigint AS draft_articles, \
                    COALESCE(SUM(view_count), 0)::bigint AS total_views, \
                    COALESCE(AVG(view_count), 0)::float8 AS avg_views \
             FROM articles",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ArticleTotals {
            total_articles: row.total_articles,
            published_articles: row.published_articles,
            draft_articles: row.draft_articles,
            total_views: row.total_views,
            avg_views: row.avg_views,
        })
    }

    async fn most_viewed(&self, limit: i64) -> DomainResult<Vec<MostViewedEntry>> {
        let rows = sqlx::query_as::<_, MostViewedRow>(
            "SELECT title, slug, view_count, updated_at \
             FROM articles WHERE status = 'published' \
             ORDER BY view_count DESC, updated_at DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| MostViewedEntry {
                title: row.title,
                slug: row.slug,
                view_count: row.view_count,
                updated_at: row.updated_at,
            })
            .collect())
    }

    async fn recent_articles(&self, limit: i64) -> DomainResult<Vec<RecentArticleEntry>> {
        let rows = sqlx::query_as::<_, RecentRow>(
            "SELECT a.title, a.slug, a.status, a.created_at, u.username AS author_username \
             FROM articles a \
             LEFT JOIN users u ON u.id = a.author_id \
             ORDER BY a.created_at DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| RecentArticleEntry {
                title: row.title,
                slug: row.slug,
                status: row.status,
                created_at: row.created_at,
                author_username: row.author_username,
            })
            .collect())
    }

    async fn category_stats(&self) -> DomainResult<Vec<CategoryStat>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT m.title AS category, \
                    COUNT(a.id)::bigint AS articles, \
                    COALESCE(SUM(a.view_count), 0)::bigint AS total_views \
             FROM menu_items m \
             JOIN articles a ON a.menu_item_id = m.id \
             GROUP BY m.title \
             ORDER BY articles DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryStat {
                category: row.category,
                articles: row.articles,
                total_views: row.total_views,
            })
            .collect())
    }

    async fn unassigned_stat(&self) -> DomainResult<Option<CategoryStat>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT 'Bez kategorii' AS category, \
                    COUNT(*)::bigint AS articles, \
                    COALESCE(SUM(view_count), 0)::bigint AS total_views \
             FROM articles WHERE menu_item_id IS NULL",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if row.articles == 0 {
            return Ok(None);
        }

        Ok(Some(CategoryStat {
            category: row.category,
            articles: row.articles,
            total_views: row.total_views,
        }))
    }

    async fn monthly_stats(&self, months: i32) -> DomainResult<Vec<MonthlyStat>> {
        let rows = sqlx::query_as::<_, MonthlyRow>(
            "SELECT to_char(created_at, 'YYYY-MM') AS month, \
                    COUNT(*)::bigint AS articles_created, \
                    COUNT(*) FILTER (WHERE status = 'published')::bigint AS articles_published \
             FROM articles \
             WHERE created_at >= NOW() - ($1::int * INTERVAL '1 month') \
             GROUP BY month \
             ORDER BY month",
        )
        .bind(months)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| MonthlyStat {
                month: row.month,
                articles_created: row.articles_created,
                articles_published: row.articles_published,
            })
            .collect())
    }

    async fn user_stats(&self) -> DomainResult<Vec<UserActivityStat>> {
        let rows = sqlx::query_as::<_, UserActivityRow>(
            "SELECT u.username, \
                    COUNT(a.id)::bigint AS articles_created, \
                    COALESCE(SUM(a.view_count), 0)::bigint AS total_views, \
                    MAX(a.updated_at) AS last_activity \
             FROM users u \
             LEFT JOIN articles a ON a.author_id = u.id \
             GROUP BY u.username \
             ORDER BY articles_created DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| UserActivityStat {
                username: row.username,
                articles_created: row.articles_created,
                total_views: row.total_views,
                last_activity: row.last_activity,
            })
            .collect())
    }
}
