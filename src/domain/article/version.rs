// src/domain/article/version.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Immutable snapshot of an article's content, taken on every save.
#[derive(Debug, Clone)]
pub struct ArticleVersion {
    pub article_id: ArticleId,
    pub version: i32,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub excerpt: Option<String>,
    pub edited_by: Option<UserId>,
    pub change_summary: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Version snapshot joined with the editor's username for listings.
#[derive(Debug, Clone)]
pub struct ArticleVersionListing {
    pub version: ArticleVersion,
    pub edited_by_username: Option<String>,
}
