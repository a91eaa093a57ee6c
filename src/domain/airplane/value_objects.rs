use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::source_fields_match;
use std::fmt;

pub const MIN_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AirplaneId(pub i64);

impl AirplaneId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("airplane id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AirplaneId> for i64 {
    fn from(value: AirplaneId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirplaneFamily(String);

impl AirplaneFamily {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("family cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn same_source(&self, other: &Self) -> bool {
        source_fields_match(&self.0, &other.0)
    }
}

impl fmt::Display for AirplaneFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AirplaneFamily> for String {
    fn from(value: AirplaneFamily) -> Self {
        value.0
    }
}

/// Manufacture year, bounded to `[1900, current_year]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AirplaneYear(i32);

impl AirplaneYear {
    pub fn new(year: i32, current_year: i32) -> DomainResult<Self> {
        if year < MIN_YEAR {
            return Err(DomainError::Validation(format!(
                "year must be minimum of {MIN_YEAR}"
            )));
        }
        if year > current_year {
            return Err(DomainError::Validation(format!(
                "year must be maximum of {current_year}"
            )));
        }
        Ok(Self(year))
    }

    /// Rehydrates a year read back from storage, where the upper bound was
    /// checked at write time.
    pub fn from_stored(year: i32) -> DomainResult<Self> {
        Self::new(year, i32::MAX)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<AirplaneYear> for i32 {
    fn from(value: AirplaneYear) -> Self {
        value.0
    }
}
