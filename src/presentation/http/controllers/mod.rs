// src/presentation/http/controllers/mod.rs
pub mod analytics;
pub mod articles;
pub mod auth;
pub mod menu;
pub mod public;
pub mod settings;
pub mod uploads;
pub mod users;
