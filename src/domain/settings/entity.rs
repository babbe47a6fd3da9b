// src/domain/settings/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SettingKey(String);

impl SettingKey {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "setting key cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct SiteSetting {
    pub key: SettingKey,
    pub value: Option<String>,
    pub value_kind: String,
    pub updated_by: Option<UserId>,
    pub updated_at: DateTime<Utc>,
}

/// Setting joined with the updating user's name, for the admin listing.
#[derive(Debug, Clone)]
pub struct SiteSettingListing {
    pub setting: SiteSetting,
    pub updated_by_username: Option<String>,
}
