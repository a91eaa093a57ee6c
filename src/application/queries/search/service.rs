use std::sync::Arc;

use crate::{
    application::{
        dto::SearchResultsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{airplane::AirplaneRepository, manufacturer::ManufacturerRepository},
};

pub struct SearchQuery {
    pub q: String,
}

/// Keyword search across airplanes and manufacturers.
pub struct SearchQueryService {
    airplane_repo: Arc<dyn AirplaneRepository>,
    manufacturer_repo: Arc<dyn ManufacturerRepository>,
}

impl SearchQueryService {
    pub fn new(
        airplane_repo: Arc<dyn AirplaneRepository>,
        manufacturer_repo: Arc<dyn ManufacturerRepository>,
    ) -> Self {
        Self {
            airplane_repo,
            manufacturer_repo,
        }
    }

    pub async fn search(&self, query: SearchQuery) -> ApplicationResult<SearchResultsDto> {
        let keyword = query.q.trim();
        if keyword.is_empty() {
            return Err(ApplicationError::validation("search keyword `q` cannot be empty"));
        }

        let (airplanes, manufacturers) = tokio::try_join!(
            self.airplane_repo.search(keyword),
            self.manufacturer_repo.search(keyword),
        )?;

        Ok(SearchResultsDto {
            airplanes: airplanes.into_iter().map(Into::into).collect(),
            manufacturers: manufacturers.into_iter().map(Into::into).collect(),
        })
    }
}
