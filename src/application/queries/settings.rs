// src/application/queries/settings.rs
use crate::application::dto::{SettingsMap, SiteSettingDto};
use crate::application::error::ApplicationResult;
use crate::domain::settings::SettingsRepository;
use std::sync::Arc;

pub struct SettingsQueryService {
    settings_repo: Arc<dyn SettingsRepository>,
}

impl SettingsQueryService {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    pub async fn admin_list(&self) -> ApplicationResult<Vec<SiteSettingDto>> {
        let listings = self.settings_repo.list().await?;
        Ok(listings.into_iter().map(Into::into).collect())
    }

    /// Key/value map for the public site header and footer.
    pub async fn public_map(&self) -> ApplicationResult<SettingsMap> {
        let listings = self.settings_repo.list().await?;
        Ok(listings
            .into_iter()
            .map(|listing| (listing.setting.key.to_string(), listing.setting.value))
            .collect())
    }
}
