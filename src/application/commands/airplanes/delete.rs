// src/application/commands/airplanes/delete.rs
use super::AirplaneCommandService;
use crate::{
    application::{
        dto::{AirplaneDto, DeleteAllAirplanesDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct DeleteAirplaneCommand {
    pub slug: String,
}

impl AirplaneCommandService {
    pub async fn delete_airplane(
        &self,
        command: DeleteAirplaneCommand,
    ) -> ApplicationResult<AirplaneDto> {
        let slug = Slug::lookup(command.slug)
            .ok_or_else(|| ApplicationError::not_found("airplane not found"))?;
        let deleted = self.repo.delete(&slug).await?;
        tracing::info!(slug = %slug, "airplane deleted");
        Ok(deleted.into())
    }

    pub async fn delete_all_airplanes(&self) -> ApplicationResult<DeleteAllAirplanesDto> {
        let count = self.repo.delete_all().await?;
        tracing::info!(count, "all airplanes deleted");
        Ok(DeleteAllAirplanesDto {
            message: "All airplanes data deleted".into(),
            count,
        })
    }
}
