// src/domain/manufacturer/entity.rs
use crate::domain::airplane::value_objects::{AirplaneFamily, AirplaneId};
use crate::domain::manufacturer::value_objects::{
    ManufacturerId, ManufacturerName, ManufacturerReference,
};
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manufacturer {
    pub id: ManufacturerId,
    pub slug: Slug,
    pub name: ManufacturerName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Manufacturer {
    pub fn rename(&mut self, name: ManufacturerName, slug: Slug, now: DateTime<Utc>) {
        self.name = name;
        self.slug = slug;
        self.updated_at = now;
    }
}

/// Short form of an airplane embedded in manufacturer listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirplaneSummary {
    pub id: AirplaneId,
    pub slug: Slug,
    pub family: AirplaneFamily,
}

#[derive(Debug, Clone)]
pub struct ManufacturerWithAirplanes {
    pub manufacturer: Manufacturer,
    pub airplanes: Vec<AirplaneSummary>,
}

#[derive(Debug, Clone)]
pub struct NewManufacturer {
    pub slug: Slug,
    pub name: ManufacturerName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewManufacturer {
    pub fn from_reference(reference: &ManufacturerReference, now: DateTime<Utc>) -> Self {
        Self {
            slug: reference.slug.clone(),
            name: reference.name.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Re-derives a dependent airplane's slug from its family under the
/// manufacturer's new name.
pub type AirplaneSlugFn<'a> = dyn Fn(&AirplaneFamily) -> DomainResult<Slug> + Send + Sync + 'a;

#[derive(Debug, Clone)]
pub struct ManufacturerUpdate {
    pub id: ManufacturerId,
    pub slug: Slug,
    pub name: ManufacturerName,
    pub updated_at: DateTime<Utc>,
}

impl ManufacturerUpdate {
    pub fn new(manufacturer: &Manufacturer) -> Self {
        Self {
            id: manufacturer.id,
            slug: manufacturer.slug.clone(),
            name: manufacturer.name.clone(),
            updated_at: manufacturer.updated_at,
        }
    }
}

impl From<&Manufacturer> for ManufacturerUpdate {
    fn from(manufacturer: &Manufacturer) -> Self {
        Self::new(manufacturer)
    }
}

/// Outcome of a find-or-create lookup.
#[derive(Debug, Clone)]
pub enum Resolution<T> {
    Existing(T),
    Created(T),
}

impl<T> Resolution<T> {
    pub const fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Existing(value) | Self::Created(value) => value,
        }
    }
}
