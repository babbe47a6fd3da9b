// src/presentation/http/controllers/menu.rs
use crate::application::{
    commands::{CreateMenuItemCommand, ReorderEntry, UpdateMenuItemCommand},
    dto::MenuItemDto,
};
use crate::domain::menu::DisplayMode;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateMenuItemRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default)]
    pub show_excerpts: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMenuItemRequest {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default)]
    pub show_excerpts: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderItem {
    pub id: i64,
    pub position: i32,
}

#[derive(Debug, Deserialize)]
pub struct SetHiddenRequest {
    pub hidden: bool,
}

fn default_true() -> bool {
    true
}

pub async fn list_items(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<Vec<MenuItemDto>>> {
    state
        .services
        .menu_queries
        .admin_list()
        .await
        .into_http()
        .map(Json)
}

pub async fn create_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateMenuItemRequest>,
) -> HttpResult<(StatusCode, Json<MenuItemDto>)> {
    let command = CreateMenuItemCommand {
        title: payload.title,
        slug: payload.slug,
        parent_id: payload.parent_id,
        position: payload.position,
        is_active: payload.is_active,
        hidden: payload.hidden,
        display_mode: payload.display_mode,
        show_excerpts: payload.show_excerpts,
    };

    state
        .services
        .menu_commands
        .create_item(&user, command)
        .await
        .into_http()
        .map(|item| (StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMenuItemRequest>,
) -> HttpResult<Json<MenuItemDto>> {
    let command = UpdateMenuItemCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        parent_id: payload.parent_id,
        position: payload.position,
        is_active: payload.is_active,
        hidden: payload.hidden,
        display_mode: payload.display_mode,
        show_excerpts: payload.show_excerpts,
    };

    state
        .services
        .menu_commands
        .update_item(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .menu_commands
        .delete_item(&user, id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn reorder(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ReorderRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    let entries = payload
        .items
        .into_iter()
        .map(|item| ReorderEntry {
            id: item.id,
            position: item.position,
        })
        .collect();

    state
        .services
        .menu_commands
        .reorder(&user, entries)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "reordered" })))
}

pub async fn set_hidden(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<SetHiddenRequest>,
) -> HttpResult<Json<MenuItemDto>> {
    state
        .services
        .menu_commands
        .set_hidden(&user, id, payload.hidden)
        .await
        .into_http()
        .map(Json)
}

pub async fn toggle_hidden(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<MenuItemDto>> {
    state
        .services
        .menu_commands
        .toggle_hidden(&user, id)
        .await
        .into_http()
        .map(Json)
}
