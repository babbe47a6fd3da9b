// src/domain/settings/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::settings::entity::{SettingKey, SiteSettingListing};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<SiteSettingListing>>;
    /// Insert-or-update a single key.
    async fn upsert(
        &self,
        key: &SettingKey,
        value: Option<&str>,
        value_kind: &str,
        updated_by: Option<UserId>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()>;
}
