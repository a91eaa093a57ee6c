use crate::domain::manufacturer::{AirplaneSummary, Manufacturer, ManufacturerWithAirplanes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ManufacturerDto {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Manufacturer> for ManufacturerDto {
    fn from(manufacturer: Manufacturer) -> Self {
        Self {
            id: manufacturer.id.into(),
            slug: manufacturer.slug.into_inner(),
            name: manufacturer.name.into_inner(),
            created_at: manufacturer.created_at,
            updated_at: manufacturer.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AirplaneSummaryDto {
    pub id: i64,
    pub slug: String,
    pub family: String,
}

impl From<AirplaneSummary> for AirplaneSummaryDto {
    fn from(summary: AirplaneSummary) -> Self {
        Self {
            id: summary.id.into(),
            slug: summary.slug.into_inner(),
            family: summary.family.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ManufacturerWithAirplanesDto {
    #[serde(flatten)]
    pub manufacturer: ManufacturerDto,
    pub airplanes: Vec<AirplaneSummaryDto>,
}

impl From<ManufacturerWithAirplanes> for ManufacturerWithAirplanesDto {
    fn from(value: ManufacturerWithAirplanes) -> Self {
        Self {
            manufacturer: value.manufacturer.into(),
            airplanes: value.airplanes.into_iter().map(Into::into).collect(),
        }
    }
}
