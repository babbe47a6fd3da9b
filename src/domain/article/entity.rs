// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
};
use crate::domain::menu::MenuItemId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub excerpt: Option<String>,
    pub status: ArticleStatus,
    pub responsible_person: Option<String>,
    pub menu_item_id: Option<MenuItemId>,
    pub author_id: UserId,
    pub view_count: i64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Transition to the given status. `published_at` is stamped on the first
    /// transition to published and kept untouched afterwards.
    pub fn set_status(&mut self, status: ArticleStatus, now: DateTime<Utc>) {
        if status.is_published() && self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.status = status;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub excerpt: Option<String>,
    pub status: ArticleStatus,
    pub responsible_person: Option<String>,
    pub menu_item_id: Option<MenuItemId>,
    pub author_id: UserId,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub excerpt: Option<String>,
    pub status: ArticleStatus,
    pub responsible_person: Option<String>,
    pub menu_item_id: Option<MenuItemId>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// Read-model row: an article joined with its author and assigned menu item.
#[derive(Debug, Clone)]
pub struct ArticleListing {
    pub article: Article,
    pub author_username: Option<String>,
    pub author_full_name: Option<String>,
    pub category: Option<String>,
}
