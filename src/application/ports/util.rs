// src/application/ports/util.rs

/// Normalizes free text into a slug candidate. Implementations must be pure:
/// the same input always yields the same output.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
