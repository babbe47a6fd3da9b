// src/domain/session/entity.rs
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Server-side login session. Only an HMAC digest of the cookie token is
/// stored, never the token itself.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub token_digest: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone)]
pub struct NewSession {
    pub token_digest: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_inclusive() {
        let now = Utc::now();
        let session = Session {
            id: 1,
            token_digest: "digest".into(),
            user_id: UserId::new(1).unwrap(),
            created_at: now,
            expires_at: now,
        };
        assert!(session.is_expired(now));
        assert!(!session.is_expired(now - chrono::Duration::seconds(1)));
    }
}
