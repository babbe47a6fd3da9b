// src/domain/settings/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{SettingKey, SiteSetting, SiteSettingListing};
pub use repository::SettingsRepository;
