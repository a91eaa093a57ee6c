use super::ManufacturerQueryService;
use crate::{
    application::{
        dto::ManufacturerWithAirplanesDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetManufacturerBySlugQuery {
    pub slug: String,
}

impl ManufacturerQueryService {
    pub async fn get_manufacturer_by_slug(
        &self,
        query: GetManufacturerBySlugQuery,
    ) -> ApplicationResult<ManufacturerWithAirplanesDto> {
        let slug = Slug::lookup(query.slug)
            .ok_or_else(|| ApplicationError::not_found("manufacturer not found"))?;
        let manufacturer = self
            .repo
            .find_with_airplanes(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("manufacturer not found"))?;

        Ok(manufacturer.into())
    }
}
