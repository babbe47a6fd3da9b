// src/application/dto/settings.rs
use crate::domain::settings::SiteSettingListing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettingDto {
    pub key: String,
    pub value: Option<String>,
    pub value_kind: String,
    pub updated_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by_username: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteSettingListing> for SiteSettingDto {
    fn from(listing: SiteSettingListing) -> Self {
        let setting = listing.setting;
        Self {
            key: setting.key.to_string(),
            value: setting.value,
            value_kind: setting.value_kind,
            updated_by: setting.updated_by.map(Into::into),
            updated_by_username: listing.updated_by_username,
            updated_at: setting.updated_at,
        }
    }
}

/// Key/value view consumed by the public site (ordered for stable output).
pub type SettingsMap = BTreeMap<String, Option<String>>;
