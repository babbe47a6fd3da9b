// src/application/queries/menu.rs
use crate::application::dto::{MenuItemDto, MenuTreeNodeDto};
use crate::application::error::ApplicationResult;
use crate::domain::menu::{MenuRepository, build_tree};
use std::sync::Arc;

pub struct MenuQueryService {
    menu_repo: Arc<dyn MenuRepository>,
}

impl MenuQueryService {
    pub fn new(menu_repo: Arc<dyn MenuRepository>) -> Self {
        Self { menu_repo }
    }

    /// Flat listing for the admin panel, hidden items included.
    pub async fn admin_list(&self) -> ApplicationResult<Vec<MenuItemDto>> {
        let items = self.menu_repo.list_all().await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    /// Hierarchical menu for the public site: active items only, hidden
    /// subtrees pruned.
    pub async fn public_tree(&self) -> ApplicationResult<Vec<MenuTreeNodeDto>> {
        let items = self.menu_repo.list_active().await?;
        Ok(build_tree(items).into_iter().map(Into::into).collect())
    }
}
