// src/application/commands/uploads.rs
use crate::application::{
    dto::{AuthenticatedUser, UploadedFileDto},
    error::{ApplicationError, ApplicationResult},
    ports::{storage::FileStore, time::Clock},
};
use bytes::Bytes;
use std::sync::Arc;

pub struct UploadCommand {
    /// Subdirectory under the upload root ("file", "image", ...).
    pub kind: String,
    pub file_name: String,
    pub contents: Bytes,
}

pub struct UploadService {
    store: Arc<dyn FileStore>,
    clock: Arc<dyn Clock>,
}

impl UploadService {
    pub fn new(store: Arc<dyn FileStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn store_file(
        &self,
        actor: &AuthenticatedUser,
        command: UploadCommand,
    ) -> ApplicationResult<UploadedFileDto> {
        if command.contents.is_empty() {
            return Err(ApplicationError::validation("no file provided"));
        }

        let kind = validate_kind(&command.kind)?;
        let original_name = command.file_name;
        if original_name.trim().is_empty() {
            return Err(ApplicationError::validation("file name is required"));
        }

        let stored_name = format!(
            "{}-{}",
            self.clock.now().timestamp_millis(),
            sanitize_file_name(&original_name)
        );

        let size = command.contents.len();
        self.store.save(kind, &stored_name, command.contents).await?;

        tracing::info!(file = %stored_name, kind = %kind, by = %actor.username, "file uploaded");

        Ok(UploadedFileDto {
            url: format!("/uploads/{kind}/{stored_name}"),
            file_name: original_name,
            size,
        })
    }
}

/// The kind picks a subdirectory, so it must never contain path separators.
fn validate_kind(kind: &str) -> ApplicationResult<&str> {
    if kind.is_empty() {
        return Ok("file");
    }
    if kind
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(kind)
    } else {
        Err(ApplicationError::validation("invalid upload kind"))
    }
}

fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_rejects_path_separators() {
        assert!(validate_kind("file").is_ok());
        assert!(validate_kind("obrazy-2024").is_ok());
        assert!(validate_kind("../etc").is_err());
        assert!(validate_kind("a/b").is_err());
        assert_eq!(validate_kind("").unwrap(), "file");
    }

    #[test]
    fn file_names_are_sanitized() {
        assert_eq!(
            sanitize_file_name("wzór dokumentu (1).pdf"),
            "wz_r_dokumentu__1_.pdf"
        );
        assert_eq!(sanitize_file_name("raport.pdf"), "raport.pdf");
    }
}
