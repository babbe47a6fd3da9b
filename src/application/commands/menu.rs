// src/application/commands/menu.rs
use crate::application::{
    dto::{AuthenticatedUser, MenuItemDto},
    error::{ApplicationError, ApplicationResult},
    ports::{time::Clock, util::SlugGenerator},
};
use crate::domain::article::ArticleReadRepository;
use crate::domain::menu::{
    DisplayMode, MenuItemId, MenuItemUpdate, MenuRepository, NewMenuItem, PositionUpdate,
};
use std::sync::Arc;

pub struct CreateMenuItemCommand {
    pub title: String,
    pub slug: Option<String>,
    pub parent_id: Option<i64>,
    pub position: i32,
    pub is_active: bool,
    pub hidden: bool,
    pub display_mode: DisplayMode,
    pub show_excerpts: bool,
}

pub struct UpdateMenuItemCommand {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub parent_id: Option<i64>,
    pub position: i32,
    pub is_active: bool,
    pub hidden: bool,
    pub display_mode: DisplayMode,
    pub show_excerpts: bool,
}

pub struct ReorderEntry {
    pub id: i64,
    pub position: i32,
}

pub struct MenuCommandService {
    menu_repo: Arc<dyn MenuRepository>,
    article_read_repo: Arc<dyn ArticleReadRepository>,
    slugger: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl MenuCommandService {
    pub fn new(
        menu_repo: Arc<dyn MenuRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            menu_repo,
            article_read_repo,
            slugger,
            clock,
        }
    }

    pub async fn create_item(
        &self,
        _actor: &AuthenticatedUser,
        command: CreateMenuItemCommand,
    ) -> ApplicationResult<MenuItemDto> {
        if command.title.trim().is_empty() {
            return Err(ApplicationError::validation("title cannot be empty"));
        }
        let slug = match command.slug.filter(|s| !s.trim().is_empty()) {
            Some(slug) => slug,
            None => self.slugger.slugify(&command.title),
        };
        let parent_id = command.parent_id.map(MenuItemId::new).transpose()?;

        let item = self
            .menu_repo
            .insert(NewMenuItem {
                title: command.title,
                slug,
                parent_id,
                position: command.position,
                is_active: command.is_active,
                hidden: command.hidden,
                display_mode: command.display_mode,
                show_excerpts: command.show_excerpts,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(item.into())
    }

    pub async fn update_item(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateMenuItemCommand,
    ) -> ApplicationResult<MenuItemDto> {
        actor.ensure_admin()?;

        if command.title.trim().is_empty() {
            return Err(ApplicationError::validation("title cannot be empty"));
        }
        let id = MenuItemId::new(command.id)?;
        let parent_id = command.parent_id.map(MenuItemId::new).transpose()?;
        if parent_id == Some(id) {
            return Err(ApplicationError::validation(
                "menu item cannot be its own parent",
            ));
        }

        let item = self
            .menu_repo
            .update(MenuItemUpdate {
                id,
                title: command.title,
                slug: command.slug,
                parent_id,
                position: command.position,
                is_active: command.is_active,
                hidden: command.hidden,
                display_mode: command.display_mode,
                show_excerpts: command.show_excerpts,
                updated_at: self.clock.now(),
            })
            .await?;

        Ok(item.into())
    }

    /// Refuses to delete an item that still has articles assigned.
    pub async fn delete_item(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        actor.ensure_admin()?;
        let id = MenuItemId::new(id)?;

        let assigned = self.article_read_repo.count_by_menu_item(id).await?;
        if assigned > 0 {
            return Err(ApplicationError::conflict(
                "menu item still has assigned articles; move or delete them first",
            ));
        }

        self.menu_repo.delete(id).await?;
        tracing::info!(menu_item_id = i64::from(id), by = %actor.username, "menu item deleted");
        Ok(())
    }

    /// Apply a full reorder atomically.
    pub async fn reorder(
        &self,
        actor: &AuthenticatedUser,
        entries: Vec<ReorderEntry>,
    ) -> ApplicationResult<()> {
        actor.ensure_admin()?;
        if entries.is_empty() {
            return Err(ApplicationError::validation("no reorder entries supplied"));
        }

        let updates = entries
            .into_iter()
            .map(|entry| {
                Ok(PositionUpdate {
                    id: MenuItemId::new(entry.id)?,
                    position: entry.position,
                })
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        self.menu_repo
            .update_positions(&updates, self.clock.now())
            .await?;
        Ok(())
    }

    pub async fn set_hidden(
        &self,
        _actor: &AuthenticatedUser,
        id: i64,
        hidden: bool,
    ) -> ApplicationResult<MenuItemDto> {
        let id = MenuItemId::new(id)?;
        Ok(self
            .menu_repo
            .set_hidden(id, hidden, self.clock.now())
            .await?
            .into())
    }

    pub async fn toggle_hidden(
        &self,
        _actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<MenuItemDto> {
        let id = MenuItemId::new(id)?;
        Ok(self
            .menu_repo
            .toggle_hidden(id, self.clock.now())
            .await?
            .into())
    }
}
