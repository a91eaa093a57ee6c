use super::{AirplaneDto, ManufacturerDto};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultsDto {
    pub airplanes: Vec<AirplaneDto>,
    pub manufacturers: Vec<ManufacturerDto>,
}
