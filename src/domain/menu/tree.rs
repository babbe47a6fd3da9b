// src/domain/menu/tree.rs
use crate::domain::menu::entity::{MenuItem, MenuItemId};
use std::collections::{HashMap, HashSet};

/// A menu item with its visible children, as served to the public site.
#[derive(Debug, Clone)]
pub struct MenuTreeNode {
    pub item: MenuItem,
    pub children: Vec<MenuTreeNode>,
}

/// Assemble the flat, position-ordered item list into a parent/child tree.
///
/// Hidden items are dropped entirely, and so are children whose parent is
/// hidden or missing from the input. Input order is preserved, so callers are
/// expected to pass items already sorted by position.
pub fn build_tree(items: Vec<MenuItem>) -> Vec<MenuTreeNode> {
    let visible: Vec<MenuItem> = items.into_iter().filter(|item| !item.hidden).collect();
    let visible_ids: HashSet<MenuItemId> = visible.iter().map(|item| item.id).collect();

    let mut children_of: HashMap<MenuItemId, Vec<MenuItem>> = HashMap::new();
    let mut roots: Vec<MenuItem> = Vec::new();

    for item in visible {
        match item.parent_id {
            Some(parent) if visible_ids.contains(&parent) => {
                children_of.entry(parent).or_default().push(item);
            }
            Some(_) => {} // parent hidden or gone, drop the orphan
            None => roots.push(item),
        }
    }

    roots
        .into_iter()
        .map(|item| attach_children(item, &mut children_of))
        .collect()
}

fn attach_children(
    item: MenuItem,
    children_of: &mut HashMap<MenuItemId, Vec<MenuItem>>,
) -> MenuTreeNode {
    let children = children_of
        .remove(&item.id)
        .unwrap_or_default()
        .into_iter()
        .map(|child| attach_children(child, children_of))
        .collect();
    MenuTreeNode { item, children }
}
