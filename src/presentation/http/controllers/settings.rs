// src/presentation/http/controllers/settings.rs
use crate::application::dto::SiteSettingDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde_json::json;
use std::collections::BTreeMap;

pub async fn list_settings(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<Vec<SiteSettingDto>>> {
    state
        .services
        .settings_queries
        .admin_list()
        .await
        .into_http()
        .map(Json)
}

pub async fn update_settings(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(values): Json<BTreeMap<String, Option<String>>>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .settings_commands
        .update_settings(&user, values)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "updated" })))
}
