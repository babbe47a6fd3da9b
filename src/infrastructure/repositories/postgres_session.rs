// src/infrastructure/repositories/postgres_session.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::session::{NewSession, Session, SessionRepository};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SessionRow {
    id: i64,
    token_digest: String,
    user_id: i64,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl TryFrom<SessionRow> for Session {
    type Error = DomainError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        Ok(Session {
            id: row.id,
            token_digest: row.token_digest,
            user_id: UserId::new(row.user_id)?,
            created_at: row.created_at,
            expires_at: row.expires_at,
        })
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn insert(&self, session: NewSession) -> DomainResult<Session> {
        let row = sqlx::query_as::<_, SessionRow>(
            "INSERT INTO sessions (token_digest, user_id, created_at, expires_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, token_digest, user_id, created_at, expires_at",
        )
        .bind(&session.token_digest)
        .bind(i64::from(session.user_id))
        .bind(session.created_at)
        .bind(session.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Session::try_from(row)
    }

    async fn find_by_digest(&self, token_digest: &str) -> DomainResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            "SELECT id, token_digest, user_id, created_at, expires_at \
             FROM sessions WHERE token_digest = $1",
        )
        .bind(token_digest)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Session::try_from).transpose()
    }

    async fn delete_by_digest(&self, token_digest: &str) -> DomainResult<()> {
        sqlx::query("DELETE FROM sessions WHERE token_digest = $1")
            .bind(token_digest)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}
