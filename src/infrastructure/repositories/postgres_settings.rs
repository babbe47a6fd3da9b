// src/infrastructure/repositories/postgres_settings.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::settings::{SettingKey, SettingsRepository, SiteSetting, SiteSettingListing};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSettingsRepository {
    pool: PgPool,
}

impl PostgresSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SettingRow {
    key: String,
    value: Option<String>,
    value_kind: String,
    updated_by: Option<i64>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SettingRow> for SiteSetting {
    type Error = DomainError;

    fn try_from(row: SettingRow) -> Result<Self, Self::Error> {
        Ok(SiteSetting {
            key: SettingKey::new(row.key)?,
            value: row.value,
            value_kind: row.value_kind,
            updated_by: row.updated_by.map(UserId::new).transpose()?,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct SettingListingRow {
    #[sqlx(flatten)]
    setting: SettingRow,
    updated_by_username: Option<String>,
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn list(&self) -> DomainResult<Vec<SiteSettingListing>> {
        let rows = sqlx::query_as::<_, SettingListingRow>(
            "SELECT s.key, s.value, s.value_kind, s.updated_by, s.updated_at, \
                    u.username AS updated_by_username \
             FROM site_settings s \
             LEFT JOIN users u ON u.id = s.updated_by \
             ORDER BY s.key",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(SiteSettingListing {
                    setting: SiteSetting::try_from(row.setting)?,
                    updated_by_username: row.updated_by_username,
                })
            })
            .collect()
    }

    async fn upsert(
        &self,
        key: &SettingKey,
        value: Option<&str>,
        value_kind: &str,
        updated_by: Option<UserId>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO site_settings (key, value, value_kind, updated_by, updated_at) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (key) DO UPDATE \
             SET value = EXCLUDED.value, value_kind = EXCLUDED.value_kind, \
                 updated_by = EXCLUDED.updated_by, updated_at = EXCLUDED.updated_at",
        )
        .bind(key.as_str())
        .bind(value)
        .bind(value_kind)
        .bind(updated_by.map(i64::from))
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }
}
