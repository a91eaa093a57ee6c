// src/domain/airplane/entity.rs
use crate::domain::airplane::value_objects::{AirplaneFamily, AirplaneId, AirplaneYear};
use crate::domain::manufacturer::{Manufacturer, ManufacturerReference};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Airplane {
    pub id: AirplaneId,
    pub slug: Slug,
    pub family: AirplaneFamily,
    pub year: Option<AirplaneYear>,
    pub manufacturer: Manufacturer,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Airplane {
    /// Whether `reference` and `family` name this airplane, as opposed to a
    /// different airplane whose fields happen to derive the same slug.
    pub fn same_source(&self, reference: &ManufacturerReference, family: &AirplaneFamily) -> bool {
        self.manufacturer.name.same_source(&reference.name) && self.family.same_source(family)
    }
}

/// Insert payload. The manufacturer is connected by slug or created from the
/// reference inside the same transaction as the airplane row.
#[derive(Debug, Clone)]
pub struct NewAirplane {
    pub slug: Slug,
    pub family: AirplaneFamily,
    pub year: Option<AirplaneYear>,
    pub manufacturer: ManufacturerReference,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AirplaneUpdate {
    pub id: AirplaneId,
    pub slug: Slug,
    pub family: AirplaneFamily,
    pub year: Option<AirplaneYear>,
    pub manufacturer: ManufacturerReference,
    pub updated_at: DateTime<Utc>,
}

impl AirplaneUpdate {
    pub fn for_airplane(
        airplane: &Airplane,
        manufacturer: ManufacturerReference,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: airplane.id,
            slug: airplane.slug.clone(),
            family: airplane.family.clone(),
            year: airplane.year,
            manufacturer,
            updated_at,
        }
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = slug;
        self
    }

    pub fn with_family(mut self, family: AirplaneFamily) -> Self {
        self.family = family;
        self
    }

    pub fn with_year(mut self, year: Option<AirplaneYear>) -> Self {
        if year.is_some() {
            self.year = year;
        }
        self
    }
}
