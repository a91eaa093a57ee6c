use super::AirplaneQueryService;
use crate::{
    application::{
        dto::AirplaneDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetAirplaneBySlugQuery {
    pub slug: String,
}

impl AirplaneQueryService {
    pub async fn get_airplane_by_slug(
        &self,
        query: GetAirplaneBySlugQuery,
    ) -> ApplicationResult<AirplaneDto> {
        let slug = Slug::lookup(query.slug)
            .ok_or_else(|| ApplicationError::not_found("airplane not found"))?;
        let airplane = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("airplane not found"))?;

        Ok(airplane.into())
    }
}
