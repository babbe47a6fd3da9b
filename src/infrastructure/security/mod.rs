// src/infrastructure/security/mod.rs
mod password;
mod session_token;

pub use password::Argon2PasswordHasher;
pub use session_token::HmacSessionTokenCodec;
