// src/application/dto/mod.rs
pub mod analytics;
pub mod articles;
pub mod auth;
pub mod menu;
pub mod settings;
pub mod uploads;
pub mod users;

pub use analytics::AnalyticsReport;
pub use articles::{
    ArticleDto, ArticleVersionDto, PageMeta, PublicArticlePage, PublicArticleView,
};
pub use auth::{AuthenticatedUser, IssuedSession};
pub use menu::{MenuItemDto, MenuTreeNodeDto};
pub use settings::{SettingsMap, SiteSettingDto};
pub use uploads::UploadedFileDto;
pub use users::UserDto;
