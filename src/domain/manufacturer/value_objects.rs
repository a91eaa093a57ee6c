use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, source_fields_match};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManufacturerId(pub i64);

impl ManufacturerId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "manufacturer id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ManufacturerId> for i64 {
    fn from(value: ManufacturerId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufacturerName(String);

impl ManufacturerName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "manufacturer name cannot be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether both names identify the same manufacturer, ignoring case and spacing.
    pub fn same_source(&self, other: &Self) -> bool {
        source_fields_match(&self.0, &other.0)
    }
}

impl fmt::Display for ManufacturerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ManufacturerName> for String {
    fn from(value: ManufacturerName) -> Self {
        value.0
    }
}

/// A manufacturer named by an airplane write: the slug to look up and the
/// fields needed to create it when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufacturerReference {
    pub slug: Slug,
    pub name: ManufacturerName,
}
