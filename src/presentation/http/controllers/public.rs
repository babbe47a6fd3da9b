// src/presentation/http/controllers/public.rs
use crate::application::{
    dto::{MenuTreeNodeDto, PublicArticlePage, PublicArticleView, SettingsMap},
    queries::PublicListQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
pub struct PublicListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub menu_item_id: Option<i64>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PublicListParams>,
) -> HttpResult<Json<PublicArticlePage>> {
    state
        .services
        .article_queries
        .public_list(PublicListQuery {
            page: params.page,
            limit: params.limit,
            menu_item_id: params.menu_item_id,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PublicArticleView>> {
    state
        .services
        .article_queries
        .public_get_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

/// Count a view without returning the article body.
pub async fn record_view(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    let view_count = state
        .services
        .article_commands
        .record_view(&slug)
        .await
        .into_http()?;

    Ok(Json(json!({ "view_count": view_count })))
}

pub async fn menu_tree(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<MenuTreeNodeDto>>> {
    state
        .services
        .menu_queries
        .public_tree()
        .await
        .into_http()
        .map(Json)
}

pub async fn settings_map(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<SettingsMap>> {
    state
        .services
        .settings_queries
        .public_map()
        .await
        .into_http()
        .map(Json)
}
