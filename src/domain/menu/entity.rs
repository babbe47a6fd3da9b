// src/domain/menu/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuItemId(pub i64);

impl MenuItemId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "menu item id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MenuItemId> for i64 {
    fn from(value: MenuItemId) -> Self {
        value.0
    }
}

/// How a menu item renders its assigned articles: one standalone page or a
/// chronological list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Single,
    List,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Single => "single",
            DisplayMode::List => "list",
        }
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::Single
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(DisplayMode::Single),
            "list" => Ok(DisplayMode::List),
            other => Err(DomainError::Validation(format!(
                "unknown display mode '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub title: String,
    pub slug: String,
    pub parent_id: Option<MenuItemId>,
    pub position: i32,
    pub is_active: bool,
    pub hidden: bool,
    pub display_mode: DisplayMode,
    pub show_excerpts: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub title: String,
    pub slug: String,
    pub parent_id: Option<MenuItemId>,
    pub position: i32,
    pub is_active: bool,
    pub hidden: bool,
    pub display_mode: DisplayMode,
    pub show_excerpts: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MenuItemUpdate {
    pub id: MenuItemId,
    pub title: String,
    pub slug: String,
    pub parent_id: Option<MenuItemId>,
    pub position: i32,
    pub is_active: bool,
    pub hidden: bool,
    pub display_mode: DisplayMode,
    pub show_excerpts: bool,
    pub updated_at: DateTime<Utc>,
}

/// One entry of a bulk reorder request.
#[derive(Debug, Clone, Copy)]
pub struct PositionUpdate {
    pub id: MenuItemId,
    pub position: i32,
}
