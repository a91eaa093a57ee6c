use chrono::{DateTime, Utc};

use super::AirplaneCommandService;
use crate::{
    application::{
        dto::AirplaneDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        airplane::{Airplane, AirplaneFamily, AirplaneUpdate, AirplaneYear},
        errors::{DomainError, DomainResult},
        manufacturer::{ManufacturerReference, retry_on_unique_violation},
        slug::Slug,
    },
};

/// Partial update; absent fields keep their stored values. The slug is
/// re-derived from the resulting manufacturer name and family.
pub struct UpdateAirplaneCommand {
    pub slug: String,
    pub manufacturer: Option<String>,
    pub family: Option<String>,
    pub year: Option<i32>,
}

impl AirplaneCommandService {
    pub async fn update_airplane(
        &self,
        command: UpdateAirplaneCommand,
    ) -> ApplicationResult<AirplaneDto> {
        let UpdateAirplaneCommand {
            slug,
            manufacturer,
            family,
            year,
        } = command;

        let current_slug =
            Slug::lookup(slug).ok_or_else(|| ApplicationError::not_found("airplane not found"))?;
        let reference = manufacturer
            .as_deref()
            .map(|name| self.resolver.reference(name))
            .transpose()?;
        let family = family.map(AirplaneFamily::new).transpose()?;
        let year = self.parse_year(year)?;
        let now = self.clock.now();

        let updated = retry_on_unique_violation(|| {
            self.apply_update(&current_slug, reference.as_ref(), family.as_ref(), year, now)
        })
        .await
        .map_err(|err| match err {
            DomainError::NotFound(_) => ApplicationError::not_found("airplane not found"),
            other => other.into(),
        })?;

        if updated.slug != current_slug {
            tracing::info!(from = %current_slug, to = %updated.slug, "airplane slug renamed");
        }
        Ok(updated.into())
    }

    async fn apply_update(
        &self,
        current_slug: &Slug,
        reference: Option<&ManufacturerReference>,
        family: Option<&AirplaneFamily>,
        year: Option<AirplaneYear>,
        now: DateTime<Utc>,
    ) -> DomainResult<Airplane> {
        let current = self
            .repo
            .find_by_slug(current_slug)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("airplane `{current_slug}`")))?;

        let reference = reference.cloned().unwrap_or_else(|| ManufacturerReference {
            slug: current.manufacturer.slug.clone(),
            name: current.manufacturer.name.clone(),
        });
        let family = family.cloned().unwrap_or_else(|| current.family.clone());
        let slug = self
            .deriver
            .derive(&[reference.name.as_str(), family.as_str()])?;

        if slug != current.slug {
            if let Some(other) = self.repo.find_by_slug(&slug).await? {
                if other.id != current.id {
                    return Err(DomainError::SlugConflict(format!(
                        "airplane slug `{slug}` is already used by {} {}",
                        other.manufacturer.name, other.family
                    )));
                }
            }
        }

        let update = AirplaneUpdate::for_airplane(&current, reference, now)
            .with_slug(slug)
            .with_family(family)
            .with_year(year);
        self.repo.update(update).await
    }
}
