use super::ManufacturerCommandService;
use crate::{
    application::{
        dto::{ManufacturerDto, WriteOutcome},
        error::ApplicationResult,
    },
    domain::{
        airplane::AirplaneFamily,
        errors::DomainError,
        manufacturer::{ManufacturerName, ManufacturerReference, ManufacturerUpdate, Resolution},
    },
};

pub struct CreateManufacturerCommand {
    pub name: String,
}

impl ManufacturerCommandService {
    /// Creates a manufacturer. Re-submitting a name that matches the stored one
    /// (ignoring case and spacing) overwrites it; a different name deriving the
    /// same slug is a conflict.
    pub async fn create_manufacturer(
        &self,
        command: CreateManufacturerCommand,
    ) -> ApplicationResult<WriteOutcome<ManufacturerDto>> {
        let name = ManufacturerName::new(command.name)?;
        let slug = self.deriver.derive(&[name.as_str()])?;
        let reference = ManufacturerReference { slug, name };
        let now = self.clock.now();

        let outcome = match self.resolver.resolve(&reference, now).await? {
            Resolution::Created(created) => WriteOutcome::Created(created),
            Resolution::Existing(mut existing) if existing.name.same_source(&reference.name) => {
                let slug = existing.slug.clone();
                existing.rename(reference.name.clone(), slug, now);
                let airplane_slug = |family: &AirplaneFamily| {
                    self.deriver
                        .derive(&[reference.name.as_str(), family.as_str()])
                };
                let updated = self
                    .repo
                    .update(ManufacturerUpdate::from(&existing), &airplane_slug)
                    .await?;
                WriteOutcome::Updated(updated)
            }
            Resolution::Existing(existing) => {
                return Err(DomainError::SlugConflict(format!(
                    "manufacturer slug `{}` is already used by {}",
                    existing.slug, existing.name
                ))
                .into());
            }
        };

        tracing::info!(
            slug = %reference.slug,
            created = outcome.was_created(),
            "manufacturer written"
        );
        Ok(outcome.map(Into::into))
    }
}
