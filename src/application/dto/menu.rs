// src/application/dto/menu.rs
use crate::domain::menu::{DisplayMode, MenuItem, MenuTreeNode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub parent_id: Option<i64>,
    pub position: i32,
    pub is_active: bool,
    pub hidden: bool,
    pub display_mode: DisplayMode,
    pub show_excerpts: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuItem> for MenuItemDto {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.into(),
            title: item.title,
            slug: item.slug,
            parent_id: item.parent_id.map(Into::into),
            position: item.position,
            is_active: item.is_active,
            hidden: item.hidden,
            display_mode: item.display_mode,
            show_excerpts: item.show_excerpts,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Public menu entry with nested children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTreeNodeDto {
    #[serde(flatten)]
    pub item: MenuItemDto,
    pub children: Vec<MenuTreeNodeDto>,
}

impl From<MenuTreeNode> for MenuTreeNodeDto {
    fn from(node: MenuTreeNode) -> Self {
        Self {
            item: node.item.into(),
            children: node.children.into_iter().map(Into::into).collect(),
        }
    }
}
