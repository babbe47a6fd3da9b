// tests/menu_service_unit.rs
mod support;

use biuletyn_core::application::commands::{
    CreateArticleCommand, CreateMenuItemCommand, ReorderEntry, UpdateMenuItemCommand,
};
use biuletyn_core::application::error::ApplicationError;
use biuletyn_core::application::ports::time::Clock;
use biuletyn_core::domain::article::ArticleStatus;
use biuletyn_core::domain::menu::DisplayMode;
use support::{admin_actor, build_harness, editor_actor};

fn create_item(title: &str) -> CreateMenuItemCommand {
    CreateMenuItemCommand {
        title: title.into(),
        slug: None,
        parent_id: None,
        position: 0,
        is_active: true,
        hidden: false,
        display_mode: DisplayMode::Single,
        show_excerpts: false,
    }
}

fn update_item(id: i64, title: &str) -> UpdateMenuItemCommand {
    UpdateMenuItemCommand {
        id,
        title: title.into(),
        slug: title.to_lowercase().replace(' ', "-"),
        parent_id: None,
        position: 0,
        is_active: true,
        hidden: false,
        display_mode: DisplayMode::Single,
        show_excerpts: false,
    }
}

#[tokio::test]
async fn create_generates_slug_from_title() {
    let harness = build_harness();

    let item = harness
        .services
        .menu_commands
        .create_item(&admin_actor(), create_item("Dane podstawowe"))
        .await
        .unwrap();

    assert_eq!(item.slug, "dane-podstawowe");
    assert!(item.is_active);
    assert!(!item.hidden);
}

#[tokio::test]
async fn delete_refuses_when_articles_are_assigned() {
    let harness = build_harness();
    let actor = admin_actor();

    let item = harness
        .services
        .menu_commands
        .create_item(&actor, create_item("Komunikaty"))
        .await
        .unwrap();

    harness
        .services
        .article_commands
        .create_article(
            &actor,
            CreateArticleCommand {
                title: "Komunikat".into(),
                slug: None,
                body: "Treść".into(),
                excerpt: None,
                status: ArticleStatus::Published,
                responsible_person: None,
                menu_item_id: Some(item.id),
            },
        )
        .await
        .unwrap();

    let err = harness
        .services
        .menu_commands
        .delete_item(&actor, item.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)), "got {err:?}");

    // The guarded item must survive.
    let listed = harness.services.menu_queries.admin_list().await.unwrap();
    assert!(listed.iter().any(|i| i.id == item.id));
}

#[tokio::test]
async fn delete_succeeds_for_empty_item() {
    let harness = build_harness();
    let actor = admin_actor();

    let item = harness
        .services
        .menu_commands
        .create_item(&actor, create_item("Puste"))
        .await
        .unwrap();

    harness
        .services
        .menu_commands
        .delete_item(&actor, item.id)
        .await
        .unwrap();

    let listed = harness.services.menu_queries.admin_list().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn reorder_rejects_empty_payload() {
    let harness = build_harness();

    let err = harness
        .services
        .menu_commands
        .reorder(&admin_actor(), vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn reorder_is_all_or_nothing() {
    let harness = build_harness();
    let actor = admin_actor();

    let first = harness
        .services
        .menu_commands
        .create_item(&actor, create_item("Pierwszy"))
        .await
        .unwrap();

    let err = harness
        .services
        .menu_commands
        .reorder(
            &actor,
            vec![
                ReorderEntry {
                    id: first.id,
                    position: 5,
                },
                ReorderEntry {
                    id: 9999,
                    position: 1,
                },
            ],
        )
        .await
        .unwrap_err();
    assert!(
        matches!(err, ApplicationError::NotFound(_)),
        "got {err:?}"
    );

    // Nothing applied.
    let listed = harness.services.menu_queries.admin_list().await.unwrap();
    assert_eq!(listed[0].position, 0);
}

#[tokio::test]
async fn reorder_applies_new_positions() {
    let harness = build_harness();
    let actor = admin_actor();

    let a = harness
        .services
        .menu_commands
        .create_item(&actor, create_item("Aktualności"))
        .await
        .unwrap();
    let b = harness
        .services
        .menu_commands
        .create_item(&actor, create_item("Budżet"))
        .await
        .unwrap();

    harness
        .services
        .menu_commands
        .reorder(
            &actor,
            vec![
                ReorderEntry {
                    id: a.id,
                    position: 2,
                },
                ReorderEntry {
                    id: b.id,
                    position: 1,
                },
            ],
        )
        .await
        .unwrap();

    let listed = harness.services.menu_queries.admin_list().await.unwrap();
    assert_eq!(listed[0].id, b.id);
    assert_eq!(listed[1].id, a.id);
}

#[tokio::test]
async fn item_cannot_become_its_own_parent() {
    let harness = build_harness();
    let actor = admin_actor();

    let item = harness
        .services
        .menu_commands
        .create_item(&actor, create_item("Struktura"))
        .await
        .unwrap();

    let mut command = update_item(item.id, "Struktura");
    command.parent_id = Some(item.id);
    let err = harness
        .services
        .menu_commands
        .update_item(&actor, command)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn structural_changes_require_admin_role() {
    let harness = build_harness();
    let admin = admin_actor();
    let editor = editor_actor();

    let item = harness
        .services
        .menu_commands
        .create_item(&admin, create_item("Ogłoszenia"))
        .await
        .unwrap();

    let err = harness
        .services
        .menu_commands
        .update_item(&editor, update_item(item.id, "Zmiana"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "got {err:?}");

    let err = harness
        .services
        .menu_commands
        .delete_item(&editor, item.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "got {err:?}");

    let err = harness
        .services
        .menu_commands
        .reorder(
            &editor,
            vec![ReorderEntry {
                id: item.id,
                position: 1,
            }],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "got {err:?}");
}

#[tokio::test]
async fn public_tree_skips_hidden_and_inactive_branches() {
    let harness = build_harness();
    let actor = admin_actor();

    let visible = harness
        .services
        .menu_commands
        .create_item(&actor, create_item("Widoczne"))
        .await
        .unwrap();

    let mut hidden = create_item("Ukryte");
    hidden.hidden = true;
    harness
        .services
        .menu_commands
        .create_item(&actor, hidden)
        .await
        .unwrap();

    let mut inactive = create_item("Nieaktywne");
    inactive.is_active = false;
    harness
        .services
        .menu_commands
        .create_item(&actor, inactive)
        .await
        .unwrap();

    let mut child = create_item("Dziecko");
    child.parent_id = Some(visible.id);
    let child = harness
        .services
        .menu_commands
        .create_item(&actor, child)
        .await
        .unwrap();

    let tree = harness.services.menu_queries.public_tree().await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].item.id, visible.id);
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].item.id, child.id);
}

#[tokio::test]
async fn public_tree_prunes_children_of_hidden_parents() {
    let harness = build_harness();
    let actor = admin_actor();

    let mut parent = create_item("Ukryty dział");
    parent.hidden = true;
    let parent = harness
        .services
        .menu_commands
        .create_item(&actor, parent)
        .await
        .unwrap();

    let mut orphan = create_item("Osierocone");
    orphan.parent_id = Some(parent.id);
    harness
        .services
        .menu_commands
        .create_item(&actor, orphan)
        .await
        .unwrap();

    let tree = harness.services.menu_queries.public_tree().await.unwrap();
    assert!(tree.is_empty());
}

#[tokio::test]
async fn hiding_stamps_the_update_time_from_the_clock() {
    let harness = build_harness();
    let actor = admin_actor();

    let item = harness
        .services
        .menu_commands
        .create_item(&actor, create_item("Archiwum"))
        .await
        .unwrap();

    harness.clock.advance(chrono::Duration::minutes(30));

    let updated = harness
        .services
        .menu_commands
        .toggle_hidden(&actor, item.id)
        .await
        .unwrap();
    assert!(updated.hidden);
    assert_eq!(updated.updated_at, harness.clock.now());
    assert!(updated.updated_at > item.updated_at);
}
