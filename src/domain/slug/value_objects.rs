use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const SLUG_SEPARATOR: char = '-';

/// Canonical, URL-safe identifier: lowercase ASCII alphanumerics separated by
/// single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_canonical(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must be lowercase kebab-case"
            )));
        }
        Ok(Self(value))
    }

    /// Interprets a client-supplied lookup key verbatim. Keys that are not in
    /// canonical form cannot match a stored slug and yield `None`.
    pub fn lookup(value: impl Into<String>) -> Option<Self> {
        Self::new(value).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Two source values name the same logical entity when they are equal after
/// trimming, collapsing inner whitespace and case-folding.
pub fn source_fields_match(left: &str, right: &str) -> bool {
    fold(left) == fold(right)
}

fn fold(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn is_canonical(value: &str) -> bool {
    !value.starts_with(SLUG_SEPARATOR)
        && !value.ends_with(SLUG_SEPARATOR)
        && !value.contains("--")
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == SLUG_SEPARATOR)
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
