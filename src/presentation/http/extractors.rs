// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Cookie, HeaderMapExt};

use super::error::HttpError;

/// Name of the HttpOnly cookie carrying the raw session token.
pub const SESSION_COOKIE: &str = "bip_session";

/// The session cookie's raw token, when present.
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

/// A valid, unexpired session resolved into its user.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

fn session_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_owned))
}

async fn http_state<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
) -> Result<HttpState, HttpError> {
    Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map(|Extension(app_state)| app_state)
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(session_token(parts)))
    }
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = http_state(parts, state).await?;

        let token = session_token(parts).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("authentication required"))
        })?;

        let user = app_state
            .services
            .sessions
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}
