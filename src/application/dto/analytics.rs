// src/application/dto/analytics.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleTotals {
    pub total_articles: i64,
    pub published_articles: i64,
    pub draft_articles: i64,
    pub total_views: i64,
    pub avg_views: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MostViewedEntry {
    pub title: String,
    pub slug: String,
    pub view_count: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentArticleEntry {
    pub title: String,
    pub slug: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub author_username: Option<String>,
}

/// Article count and accumulated views for one menu item; `category` is the
/// menu item title, with a dedicated bucket for unassigned articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub articles: i64,
    pub total_views: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStat {
    /// `YYYY-MM` bucket.
    pub month: String,
    pub articles_created: i64,
    pub articles_published: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActivityStat {
    pub username: String,
    pub articles_created: i64,
    pub total_views: i64,
    pub last_activity: Option<DateTime<Utc>>,
}

/// Everything the admin dashboard renders in one response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub article_stats: ArticleTotals,
    pub most_viewed: Vec<MostViewedEntry>,
    pub recent_articles: Vec<RecentArticleEntry>,
    pub category_stats: Vec<CategoryStat>,
    pub monthly_stats: Vec<MonthlyStat>,
    pub user_stats: Vec<UserActivityStat>,
}
