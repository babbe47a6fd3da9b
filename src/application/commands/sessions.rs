// src/application/commands/sessions.rs
use crate::application::{
    dto::{AuthenticatedUser, IssuedSession, UserDto},
    error::{ApplicationError, ApplicationResult},
    ports::{
        security::{PasswordHasher, SessionTokenCodec},
        time::Clock,
    },
};
use crate::domain::session::{NewSession, SessionRepository};
use crate::domain::user::{UserRepository, Username};
use chrono::Duration;
use std::sync::Arc;

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

pub struct SessionCommandService {
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_codec: Arc<dyn SessionTokenCodec>,
    clock: Arc<dyn Clock>,
    session_ttl: Duration,
}

impl SessionCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        session_repo: Arc<dyn SessionRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_codec: Arc<dyn SessionTokenCodec>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            password_hasher,
            token_codec,
            clock,
            session_ttl,
        }
    }

    /// Verify credentials and open a session. The raw token goes into the
    /// cookie; only its digest is persisted. Each login also sweeps sessions
    /// that have already expired, so the table does not grow without bound.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<IssuedSession> {
        if command.username.trim().is_empty() || command.password.is_empty() {
            return Err(ApplicationError::validation(
                "username and password are required",
            ));
        }

        let username = Username::new(command.username)?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        let now = self.clock.now();
        let swept = self.session_repo.delete_expired(now).await?;
        if swept > 0 {
            tracing::debug!(swept, "expired sessions removed");
        }

        let token = self.token_codec.generate_token();
        let session = NewSession {
            token_digest: self.token_codec.digest(&token),
            user_id: user.id,
            created_at: now,
            expires_at: now + self.session_ttl,
        };
        let stored = self.session_repo.insert(session).await?;

        tracing::info!(user = %user.username, "session opened");

        Ok(IssuedSession {
            token,
            expires_at: stored.expires_at,
            user: UserDto::from(user),
        })
    }

    /// Resolve the cookie token into the logged-in user. Expired sessions are
    /// deleted on sight and treated as absent.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let digest = self.token_codec.digest(token);
        let session = self
            .session_repo
            .find_by_digest(&digest)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid session"))?;

        if session.is_expired(self.clock.now()) {
            self.session_repo.delete_by_digest(&digest).await?;
            return Err(ApplicationError::unauthorized("session expired"));
        }

        let user = self
            .user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid session"))?;

        Ok(AuthenticatedUser::from(&user))
    }

    pub async fn logout(&self, token: &str) -> ApplicationResult<()> {
        let digest = self.token_codec.digest(token);
        self.session_repo.delete_by_digest(&digest).await?;
        Ok(())
    }

    /// Current user's profile for the admin shell.
    pub async fn profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(user.into())
    }
}
