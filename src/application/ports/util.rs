// src/application/ports/util.rs

/// Turns arbitrary text (including Polish diacritics) into a URL-safe slug.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
