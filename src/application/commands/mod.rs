// src/application/commands/mod.rs
pub mod articles;
pub mod menu;
pub mod sessions;
pub mod settings;
pub mod uploads;
pub mod users;

pub use articles::{ArticleCommandService, CreateArticleCommand, UpdateArticleCommand};
pub use menu::{
    CreateMenuItemCommand, MenuCommandService, ReorderEntry, UpdateMenuItemCommand,
};
pub use sessions::{LoginCommand, SessionCommandService};
pub use settings::SettingsCommandService;
pub use uploads::{UploadCommand, UploadService};
pub use users::{CreateUserCommand, UpdateUserCommand, UserCommandService};
