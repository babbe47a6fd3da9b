// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Persists uploaded files under a static root served back at `/uploads`.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn save(
        &self,
        relative_dir: &str,
        file_name: &str,
        contents: Bytes,
    ) -> ApplicationResult<()>;
}
