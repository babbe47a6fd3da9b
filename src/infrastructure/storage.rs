// src/infrastructure/storage.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::FileStore,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

/// Stores uploads under a local directory that the HTTP layer serves back at
/// `/uploads`.
#[derive(Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(
        &self,
        relative_dir: &str,
        file_name: &str,
        contents: Bytes,
    ) -> ApplicationResult<()> {
        let dir = self.root.join(relative_dir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let path = dir.join(file_name);
        tokio::fs::write(&path, &contents)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(())
    }
}
