use chrono::{DateTime, Utc};

use super::ManufacturerCommandService;
use crate::{
    application::{
        dto::ManufacturerDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        airplane::AirplaneFamily,
        errors::{DomainError, DomainResult},
        manufacturer::{
            Manufacturer, ManufacturerName, ManufacturerUpdate, retry_on_unique_violation,
        },
        slug::Slug,
    },
};

pub struct UpdateManufacturerCommand {
    pub slug: String,
    pub name: String,
}

impl ManufacturerCommandService {
    /// Renames a manufacturer. Its slug and the slugs of all of its airplanes
    /// are re-derived and stored atomically with the new name.
    pub async fn update_manufacturer(
        &self,
        command: UpdateManufacturerCommand,
    ) -> ApplicationResult<ManufacturerDto> {
        let current_slug = Slug::lookup(command.slug)
            .ok_or_else(|| ApplicationError::not_found("manufacturer not found"))?;
        let name = ManufacturerName::new(command.name)?;
        let slug = self.deriver.derive(&[name.as_str()])?;
        let now = self.clock.now();

        let updated = retry_on_unique_violation(|| self.apply_rename(&current_slug, &name, &slug, now))
            .await
            .map_err(|err| match err {
                DomainError::NotFound(_) => ApplicationError::not_found("manufacturer not found"),
                other => other.into(),
            })?;

        if updated.slug != current_slug {
            tracing::info!(from = %current_slug, to = %updated.slug, "manufacturer slug renamed");
        }
        Ok(updated.into())
    }

    async fn apply_rename(
        &self,
        current_slug: &Slug,
        name: &ManufacturerName,
        slug: &Slug,
        now: DateTime<Utc>,
    ) -> DomainResult<Manufacturer> {
        let mut manufacturer = self
            .repo
            .find_by_slug(current_slug)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("manufacturer `{current_slug}`")))?;

        if *slug != manufacturer.slug {
            if let Some(other) = self.repo.find_by_slug(slug).await? {
                if other.id != manufacturer.id {
                    return Err(DomainError::SlugConflict(format!(
                        "manufacturer slug `{slug}` is already used by {}",
                        other.name
                    )));
                }
            }
        }

        manufacturer.rename(name.clone(), slug.clone(), now);
        let update = ManufacturerUpdate::from(&manufacturer);
        let airplane_slug = |family: &AirplaneFamily| {
            self.deriver.derive(&[name.as_str(), family.as_str()])
        };
        self.repo.update(update, &airplane_slug).await
    }
}
