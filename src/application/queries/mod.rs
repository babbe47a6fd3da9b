// src/application/queries/mod.rs
pub mod analytics;
pub mod articles;
pub mod menu;
pub mod settings;
pub mod users;

pub use analytics::{AnalyticsQueryService, AnalyticsRepository};
pub use articles::{AdminListQuery, ArticleQueryService, PublicListQuery};
pub use menu::MenuQueryService;
pub use settings::SettingsQueryService;
pub use users::UserQueryService;
