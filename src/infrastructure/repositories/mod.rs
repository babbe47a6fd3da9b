// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_analytics;
mod postgres_article;
mod postgres_menu;
mod postgres_session;
mod postgres_settings;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_analytics::PostgresAnalyticsRepository;
pub use postgres_article::{PostgresArticleRepository, PostgresArticleVersionRepository};
pub use postgres_menu::PostgresMenuRepository;
pub use postgres_session::PostgresSessionRepository;
pub use postgres_settings::PostgresSettingsRepository;
pub use postgres_user::PostgresUserRepository;
