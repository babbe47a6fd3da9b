// src/infrastructure/repositories/postgres_menu.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::menu::{
    DisplayMode, MenuItem, MenuItemId, MenuItemUpdate, MenuRepository, NewMenuItem,
    PositionUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const MENU_COLUMNS: &str = "id, title, slug, parent_id, position, is_active, hidden, \
     display_mode, show_excerpts, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresMenuRepository {
    pool: PgPool,
}

impl PostgresMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MenuItemRow {
    id: i64,
    title: String,
    slug: String,
    parent_id: Option<i64>,
    position: i32,
    is_active: bool,
    hidden: bool,
    display_mode: String,
    show_excerpts: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MenuItemRow> for MenuItem {
    type Error = DomainError;

    fn try_from(row: MenuItemRow) -> Result<Self, Self::Error> {
        Ok(MenuItem {
            id: MenuItemId::new(row.id)?,
            title: row.title,
            slug: row.slug,
            parent_id: row.parent_id.map(MenuItemId::new).transpose()?,
            position: row.position,
            is_active: row.is_active,
            hidden: row.hidden,
            display_mode: row.display_mode.parse::<DisplayMode>()?,
            show_excerpts: row.show_excerpts,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl MenuRepository for PostgresMenuRepository {
    async fn list_all(&self) -> DomainResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItemRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menu_items ORDER BY position, title"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(MenuItem::try_from).collect()
    }

    async fn list_active(&self) -> DomainResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItemRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menu_items WHERE is_active ORDER BY position, title"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(MenuItem::try_from).collect()
    }

    async fn find_by_id(&self, id: MenuItemId) -> DomainResult<Option<MenuItem>> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menu_items WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(MenuItem::try_from).transpose()
    }

    async fn insert(&self, item: NewMenuItem) -> DomainResult<MenuItem> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            "INSERT INTO menu_items \
             (title, slug, parent_id, position, is_active, hidden, display_mode, \
              show_excerpts, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) \
             RETURNING {MENU_COLUMNS}"
        ))
        .bind(&item.title)
        .bind(&item.slug)
        .bind(item.parent_id.map(i64::from))
        .bind(item.position)
        .bind(item.is_active)
        .bind(item.hidden)
        .bind(item.display_mode.as_str())
        .bind(item.show_excerpts)
        .bind(item.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        MenuItem::try_from(row)
    }

    async fn update(&self, update: MenuItemUpdate) -> DomainResult<MenuItem> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            "UPDATE menu_items SET \
             title = $2, slug = $3, parent_id = $4, position = $5, is_active = $6, \
             hidden = $7, display_mode = $8, show_excerpts = $9, updated_at = $10 \
             WHERE id = $1 \
             RETURNING {MENU_COLUMNS}"
        ))
        .bind(i64::from(update.id))
        .bind(&update.title)
        .bind(&update.slug)
        .bind(update.parent_id.map(i64::from))
        .bind(update.position)
        .bind(update.is_active)
        .bind(update.hidden)
        .bind(update.display_mode.as_str())
        .bind(update.show_excerpts)
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("menu item not found".into()))?;

        MenuItem::try_from(row)
    }

    async fn delete(&self, id: MenuItemId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("menu item not found".into()));
        }
        Ok(())
    }

    async fn update_positions(
        &self,
        updates: &[PositionUpdate],
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        for update in updates {
            let result =
                sqlx::query("UPDATE menu_items SET position = $2, updated_at = $3 WHERE id = $1")
                    .bind(i64::from(update.id))
                    .bind(update.position)
                    .bind(updated_at)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_sqlx)?;

            if result.rows_affected() == 0 {
                return Err(DomainError::NotFound(format!(
                    "menu item {} not found",
                    i64::from(update.id)
                )));
            }
        }

        tx.commit().await.map_err(map_sqlx)
    }

    async fn set_hidden(
        &self,
        id: MenuItemId,
        hidden: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<MenuItem> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            "UPDATE menu_items SET hidden = $2, updated_at = $3 WHERE id = $1 \
             RETURNING {MENU_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(hidden)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("menu item not found".into()))?;

        MenuItem::try_from(row)
    }

    async fn toggle_hidden(
        &self,
        id: MenuItemId,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<MenuItem> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            "UPDATE menu_items SET hidden = NOT hidden, updated_at = $2 WHERE id = $1 \
             RETURNING {MENU_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("menu item not found".into()))?;

        MenuItem::try_from(row)
    }
}
