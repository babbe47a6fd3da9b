// src/domain/mod.rs
pub mod article;
pub mod errors;
pub mod menu;
pub mod session;
pub mod settings;
pub mod user;
