// src/application/commands/settings.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::ApplicationResult,
    ports::time::Clock,
};
use crate::domain::settings::{SettingKey, SettingsRepository};
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct SettingsCommandService {
    settings_repo: Arc<dyn SettingsRepository>,
    clock: Arc<dyn Clock>,
}

impl SettingsCommandService {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            settings_repo,
            clock,
        }
    }

    /// Upsert every submitted key, recording who changed it.
    pub async fn update_settings(
        &self,
        actor: &AuthenticatedUser,
        values: BTreeMap<String, Option<String>>,
    ) -> ApplicationResult<()> {
        let now = self.clock.now();
        for (key, value) in values {
            let key = SettingKey::new(key)?;
            self.settings_repo
                .upsert(&key, value.as_deref(), "text", Some(actor.id), now)
                .await?;
        }
        Ok(())
    }
}
