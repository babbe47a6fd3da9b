// src/domain/session/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::session::entity::{NewSession, Session};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: NewSession) -> DomainResult<Session>;
    async fn find_by_digest(&self, token_digest: &str) -> DomainResult<Option<Session>>;
    async fn delete_by_digest(&self, token_digest: &str) -> DomainResult<()>;
    /// Housekeeping: drop every session that expired before `now`.
    async fn delete_expired(&self, now: DateTime<Utc>) -> DomainResult<u64>;
}
