// src/domain/menu/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::menu::entity::{
    MenuItem, MenuItemId, MenuItemUpdate, NewMenuItem, PositionUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Every item, ordered by position then title (admin view).
    async fn list_all(&self) -> DomainResult<Vec<MenuItem>>;
    /// Active items only, ordered for tree assembly (public view).
    async fn list_active(&self) -> DomainResult<Vec<MenuItem>>;
    async fn find_by_id(&self, id: MenuItemId) -> DomainResult<Option<MenuItem>>;
    async fn insert(&self, item: NewMenuItem) -> DomainResult<MenuItem>;
    async fn update(&self, update: MenuItemUpdate) -> DomainResult<MenuItem>;
    async fn delete(&self, id: MenuItemId) -> DomainResult<()>;
    /// Apply every position change in a single transaction.
    async fn update_positions(
        &self,
        updates: &[PositionUpdate],
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()>;
    async fn set_hidden(
        &self,
        id: MenuItemId,
        hidden: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<MenuItem>;
    async fn toggle_hidden(&self, id: MenuItemId, updated_at: DateTime<Utc>)
    -> DomainResult<MenuItem>;
}
