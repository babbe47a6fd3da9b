// src/presentation/http/controllers/uploads.rs
use crate::application::{
    commands::UploadCommand,
    dto::UploadedFileDto,
    error::ApplicationError,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Multipart};

/// Multipart upload: a `file` part plus an optional `kind` part selecting the
/// target subdirectory.
pub async fn upload(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    mut multipart: Multipart,
) -> HttpResult<Json<UploadedFileDto>> {
    let mut kind = String::new();
    let mut file: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::from_error(ApplicationError::validation(err.to_string())))?
    {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("plik").to_owned();
                let contents = field.bytes().await.map_err(|err| {
                    HttpError::from_error(ApplicationError::validation(err.to_string()))
                })?;
                file = Some((file_name, contents));
            }
            Some("kind") => {
                kind = field.text().await.map_err(|err| {
                    HttpError::from_error(ApplicationError::validation(err.to_string()))
                })?;
            }
            _ => {}
        }
    }

    let (file_name, contents) = file.ok_or_else(|| {
        HttpError::from_error(ApplicationError::validation("no file provided"))
    })?;

    state
        .services
        .uploads
        .store_file(
            &user,
            UploadCommand {
                kind,
                file_name,
                contents,
            },
        )
        .await
        .into_http()
        .map(Json)
}
