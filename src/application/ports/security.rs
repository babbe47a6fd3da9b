// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Generates opaque session tokens for the login cookie and derives the keyed
/// digest under which a session is stored.
pub trait SessionTokenCodec: Send + Sync {
    fn generate_token(&self) -> String;
    fn digest(&self, token: &str) -> String;
}
