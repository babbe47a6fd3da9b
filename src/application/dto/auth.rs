// src/application/dto/auth.rs
use crate::application::dto::users::UserDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::{Role, User, UserId};
use chrono::{DateTime, Utc};

/// The resolved subject of a valid session cookie.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn ensure_admin(&self) -> ApplicationResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ApplicationError::forbidden("insufficient permissions"))
        }
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.to_string(),
            role: user.role,
        }
    }
}

/// Result of a successful login: the raw cookie token plus its expiry and the
/// authenticated user's profile.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserDto,
}
