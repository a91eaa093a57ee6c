use super::AirplaneQueryService;
use crate::application::{dto::AirplaneDto, error::ApplicationResult};

impl AirplaneQueryService {
    pub async fn list_airplanes(&self) -> ApplicationResult<Vec<AirplaneDto>> {
        let airplanes = self.repo.list().await?;
        Ok(airplanes.into_iter().map(Into::into).collect())
    }
}
