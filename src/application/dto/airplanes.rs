use super::ManufacturerDto;
use crate::domain::airplane::Airplane;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AirplaneDto {
    pub id: i64,
    pub slug: String,
    pub family: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub manufacturer: ManufacturerDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Airplane> for AirplaneDto {
    fn from(airplane: Airplane) -> Self {
        Self {
            id: airplane.id.into(),
            slug: airplane.slug.into_inner(),
            family: airplane.family.into_inner(),
            year: airplane.year.map(Into::into),
            manufacturer: airplane.manufacturer.into(),
            created_at: airplane.created_at,
            updated_at: airplane.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteAllAirplanesDto {
    pub message: String,
    pub count: u64,
}
