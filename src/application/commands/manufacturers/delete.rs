use super::ManufacturerCommandService;
use crate::{
    application::{
        dto::ManufacturerDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{errors::DomainError, slug::Slug},
};

pub struct DeleteManufacturerCommand {
    pub slug: String,
}

impl ManufacturerCommandService {
    /// Deletes a manufacturer that no airplane references. Manufacturers with
    /// airplanes are rejected; nothing is cascaded.
    pub async fn delete_manufacturer(
        &self,
        command: DeleteManufacturerCommand,
    ) -> ApplicationResult<ManufacturerDto> {
        let slug = Slug::lookup(command.slug)
            .ok_or_else(|| ApplicationError::not_found("manufacturer not found"))?;
        let manufacturer = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("manufacturer not found"))?;

        let dependents = self.repo.count_airplanes(manufacturer.id).await?;
        if dependents > 0 {
            return Err(DomainError::HasDependents(format!(
                "manufacturer `{slug}` still has {dependents} airplane(s)"
            ))
            .into());
        }

        let deleted = self.repo.delete(&slug).await?;
        tracing::info!(slug = %slug, "manufacturer deleted");
        Ok(deleted.into())
    }
}
