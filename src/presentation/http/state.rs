// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Filesystem root the `/uploads` static route serves from.
    pub upload_dir: Arc<str>,
}
