// src/domain/menu/mod.rs
pub mod entity;
pub mod repository;
pub mod tree;

pub use entity::{DisplayMode, MenuItem, MenuItemId, MenuItemUpdate, NewMenuItem, PositionUpdate};
pub use repository::MenuRepository;
pub use tree::{MenuTreeNode, build_tree};
