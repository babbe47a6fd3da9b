// src/application/queries/analytics.rs
use crate::application::dto::analytics::{
    AnalyticsReport, ArticleTotals, CategoryStat, MonthlyStat, MostViewedEntry,
    RecentArticleEntry, UserActivityStat,
};
use crate::application::error::ApplicationResult;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-model port for the dashboard aggregations. These are raw SQL rollups
/// with no domain behaviour, so the port lives here rather than in `domain`.
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn article_totals(&self) -> DomainResult<ArticleTotals>;
    async fn most_viewed(&self, limit: i64) -> DomainResult<Vec<MostViewedEntry>>;
    async fn recent_articles(&self, limit: i64) -> DomainResult<Vec<RecentArticleEntry>>;
    /// Per-menu-item buckets; articles without a menu item are not included.
    async fn category_stats(&self) -> DomainResult<Vec<CategoryStat>>;
    /// Count and views of articles with no menu item assigned.
    async fn unassigned_stat(&self) -> DomainResult<Option<CategoryStat>>;
    async fn monthly_stats(&self, months: i32) -> DomainResult<Vec<MonthlyStat>>;
    async fn user_stats(&self) -> DomainResult<Vec<UserActivityStat>>;
}

pub struct AnalyticsQueryService {
    analytics_repo: Arc<dyn AnalyticsRepository>,
}

impl AnalyticsQueryService {
    pub fn new(analytics_repo: Arc<dyn AnalyticsRepository>) -> Self {
        Self { analytics_repo }
    }

    pub async fn report(&self) -> ApplicationResult<AnalyticsReport> {
        let article_stats = self.analytics_repo.article_totals().await?;
        let most_viewed = self.analytics_repo.most_viewed(10).await?;
        let recent_articles = self.analytics_repo.recent_articles(10).await?;

        let mut category_stats = self.analytics_repo.category_stats().await?;
        if let Some(unassigned) = self.analytics_repo.unassigned_stat().await? {
            if unassigned.articles > 0 {
                category_stats.push(unassigned);
            }
        }

        let monthly_stats = self.analytics_repo.monthly_stats(12).await?;
        let user_stats = self.analytics_repo.user_stats().await?;

        Ok(AnalyticsReport {
            article_stats,
            most_viewed,
            recent_articles,
            category_stats,
            monthly_stats,
            user_stats,
        })
    }
}
