// src/application/queries/users.rs
use crate::application::dto::{AuthenticatedUser, UserDto};
use crate::application::error::ApplicationResult;
use crate::domain::user::UserRepository;
use std::sync::Arc;

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn list_users(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<UserDto>> {
        actor.ensure_admin()?;
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
