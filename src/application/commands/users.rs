// src/application/commands/users.rs
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
    ports::{security::PasswordHasher, time::Clock},
};
use crate::domain::user::{
    NewUser, PasswordHash, Role, UserId, UserRepository, UserUpdate, Username,
};
use std::sync::Arc;

pub struct CreateUserCommand {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
    pub role: Role,
}

pub struct UpdateUserCommand {
    pub id: i64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub role: Role,
}

pub struct UserCommandService {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            clock,
        }
    }

    /// Create the initial admin account at startup when it does not exist
    /// yet. Without it a fresh database has no credentials that could ever
    /// pass the login endpoint.
    pub async fn ensure_bootstrap_admin(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<Option<UserDto>> {
        let username = Username::new(username.to_owned())?;
        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Ok(None);
        }

        if password.len() < 8 {
            return Err(ApplicationError::validation(
                "password must be at least 8 characters long",
            ));
        }

        let email = format!("{}@localhost", username.as_str());
        let password_hash = PasswordHash::new(self.password_hasher.hash(password).await?)?;
        let user = self
            .user_repo
            .insert(NewUser {
                username,
                first_name: None,
                last_name: None,
                email,
                password_hash,
                role: Role::Admin,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::warn!(
            user = %user.username,
            "bootstrap admin account created; change its password after first login"
        );
        Ok(Some(user.into()))
    }

    pub async fn create_user(
        &self,
        actor: &AuthenticatedUser,
        command: CreateUserCommand,
    ) -> ApplicationResult<UserDto> {
        actor.ensure_admin()?;

        let username = Username::new(command.username)?;
        if command.email.trim().is_empty() {
            return Err(ApplicationError::validation("email cannot be empty"));
        }
        if command.password.len() < 8 {
            return Err(ApplicationError::validation(
                "password must be at least 8 characters long",
            ));
        }

        let password_hash = PasswordHash::new(self.password_hasher.hash(&command.password).await?)?;

        let user = self
            .user_repo
            .insert(NewUser {
                username,
                first_name: command.first_name,
                last_name: command.last_name,
                email: command.email,
                password_hash,
                role: command.role,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(user = %user.username, by = %actor.username, "user created");
        Ok(user.into())
    }

    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        actor.ensure_admin()?;

        let user = self
            .user_repo
            .update(UserUpdate {
                id: UserId::new(command.id)?,
                username: Username::new(command.username)?,
                first_name: command.first_name,
                last_name: command.last_name,
                email: command.email,
                role: command.role,
                updated_at: self.clock.now(),
            })
            .await?;

        Ok(user.into())
    }

    pub async fn change_password(
        &self,
        actor: &AuthenticatedUser,
        user_id: i64,
        new_password: &str,
    ) -> ApplicationResult<()> {
        actor.ensure_admin()?;

        if new_password.len() < 8 {
            return Err(ApplicationError::validation(
                "password must be at least 8 characters long",
            ));
        }

        let password_hash = PasswordHash::new(self.password_hasher.hash(new_password).await?)?;
        self.user_repo
            .update_password(UserId::new(user_id)?, password_hash, self.clock.now())
            .await?;
        Ok(())
    }

    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: i64,
    ) -> ApplicationResult<()> {
        actor.ensure_admin()?;

        let user_id = UserId::new(user_id)?;
        if user_id == actor.id {
            return Err(ApplicationError::validation(
                "cannot delete your own account",
            ));
        }

        self.user_repo.delete(user_id).await?;
        tracing::info!(user_id = i64::from(user_id), by = %actor.username, "user deleted");
        Ok(())
    }
}
