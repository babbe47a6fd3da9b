// src/domain/session/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{NewSession, Session};
pub use repository::SessionRepository;
