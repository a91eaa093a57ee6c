use super::ManufacturerQueryService;
use crate::application::{dto::ManufacturerWithAirplanesDto, error::ApplicationResult};

impl ManufacturerQueryService {
    pub async fn list_manufacturers(&self) -> ApplicationResult<Vec<ManufacturerWithAirplanesDto>> {
        let manufacturers = self.repo.list().await?;
        Ok(manufacturers.into_iter().map(Into::into).collect())
    }
}
