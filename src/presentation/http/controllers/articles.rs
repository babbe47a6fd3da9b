// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::{CreateArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleVersionDto},
    queries::AdminListQuery,
};
use crate::domain::article::ArticleStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    #[serde(default)]
    pub status: Option<ArticleStatus>,
    #[serde(default)]
    pub menu_item_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub body: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default = "default_status")]
    pub status: ArticleStatus,
    #[serde(default)]
    pub responsible_person: Option<String>,
    #[serde(default)]
    pub menu_item_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub body: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default = "default_status")]
    pub status: ArticleStatus,
    #[serde(default)]
    pub responsible_person: Option<String>,
    #[serde(default)]
    pub menu_item_id: Option<i64>,
    #[serde(default)]
    pub change_summary: Option<String>,
}

fn default_status() -> ArticleStatus {
    ArticleStatus::Draft
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<AdminListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .admin_list(AdminListQuery {
            status: params.status,
            menu_item_id: params.menu_item_id,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .admin_get(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        slug: payload.slug,
        body: payload.body,
        excerpt: payload.excerpt,
        status: payload.status,
        responsible_person: payload.responsible_person,
        menu_item_id: payload.menu_item_id,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        body: payload.body,
        excerpt: payload.excerpt,
        status: payload.status,
        responsible_person: payload.responsible_person,
        menu_item_id: payload.menu_item_id,
        change_summary: payload.change_summary,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn list_versions(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<ArticleVersionDto>>> {
    state
        .services
        .article_queries
        .list_versions(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_version(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path((id, version)): Path<(i64, i32)>,
) -> HttpResult<Json<ArticleVersionDto>> {
    state
        .services
        .article_queries
        .get_version(id, version)
        .await
        .into_http()
        .map(Json)
}
