// src/application/dto/uploads.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFileDto {
    /// Path the file is served back under, e.g. `/uploads/file/169...-wzor.pdf`.
    pub url: String,
    /// Original client-side file name.
    pub file_name: String,
    pub size: usize,
}
