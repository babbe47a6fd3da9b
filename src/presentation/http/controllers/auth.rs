// src/presentation/http/controllers/auth.rs
use crate::application::{commands::LoginCommand, dto::UserDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, SESSION_COOKIE, SessionToken};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Response> {
    let issued = state
        .services
        .sessions
        .login(LoginCommand {
            username: payload.username,
            password: payload.password,
        })
        .await
        .into_http()?;

    let max_age = (issued.expires_at - chrono::Utc::now()).num_seconds().max(0);
    let cookie = format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}",
        issued.token
    );

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(json!({ "user": issued.user })),
    )
        .into_response())
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    SessionToken(token): SessionToken,
) -> HttpResult<Response> {
    if let Some(token) = token {
        state.services.sessions.logout(&token).await.into_http()?;
    }

    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(json!({ "status": "logged out" })),
    )
        .into_response())
}

pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .sessions
        .profile(&user)
        .await
        .into_http()
        .map(Json)
}
