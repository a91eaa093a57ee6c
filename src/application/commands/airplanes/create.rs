// src/application/commands/airplanes/create.rs
use chrono::{DateTime, Utc};

use super::AirplaneCommandService;
use crate::{
    application::{
        dto::{AirplaneDto, WriteOutcome},
        error::ApplicationResult,
    },
    domain::{
        airplane::{Airplane, AirplaneFamily, AirplaneUpdate, AirplaneYear, NewAirplane},
        errors::{DomainError, DomainResult},
        manufacturer::{ManufacturerReference, retry_on_unique_violation},
        slug::Slug,
    },
};

pub struct CreateAirplaneCommand {
    pub manufacturer: String,
    pub family: String,
    pub year: Option<i32>,
}

impl CreateAirplaneCommand {
    pub fn builder() -> CreateAirplaneCommandBuilder {
        CreateAirplaneCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateAirplaneCommandBuilder {
    manufacturer: Option<String>,
    family: Option<String>,
    year: Option<i32>,
}

impl CreateAirplaneCommandBuilder {
    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub const fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn build(self) -> Result<CreateAirplaneCommand, &'static str> {
        Ok(CreateAirplaneCommand {
            manufacturer: self.manufacturer.ok_or("manufacturer is required")?,
            family: self.family.ok_or("family is required")?,
            year: self.year,
        })
    }
}

impl AirplaneCommandService {
    /// Creates an airplane, or overwrites the existing one when the submitted
    /// manufacturer and family name the same airplane.
    pub async fn create_airplane(
        &self,
        command: CreateAirplaneCommand,
    ) -> ApplicationResult<WriteOutcome<AirplaneDto>> {
        let reference = self.resolver.reference(&command.manufacturer)?;
        let family = AirplaneFamily::new(command.family)?;
        let year = self.parse_year(command.year)?;
        let slug = self
            .deriver
            .derive(&[reference.name.as_str(), family.as_str()])?;
        let now = self.clock.now();

        let outcome = retry_on_unique_violation(|| {
            self.upsert(&slug, &reference, &family, year, now)
        })
        .await?;

        tracing::info!(
            slug = %slug,
            manufacturer = %reference.slug,
            created = outcome.was_created(),
            "airplane written"
        );
        Ok(outcome.map(Into::into))
    }

    async fn upsert(
        &self,
        slug: &Slug,
        reference: &ManufacturerReference,
        family: &AirplaneFamily,
        year: Option<AirplaneYear>,
        now: DateTime<Utc>,
    ) -> DomainResult<WriteOutcome<Airplane>> {
        match self.repo.find_by_slug(slug).await? {
            Some(existing) if existing.same_source(reference, family) => {
                let update = AirplaneUpdate::for_airplane(&existing, reference.clone(), now)
                    .with_family(family.clone())
                    .with_year(year);
                Ok(WriteOutcome::Updated(self.repo.update(update).await?))
            }
            Some(existing) => Err(DomainError::SlugConflict(format!(
                "airplane slug `{slug}` is already used by {} {}",
                existing.manufacturer.name, existing.family
            ))),
            None => {
                let created = self
                    .repo
                    .insert(NewAirplane {
                        slug: slug.clone(),
                        family: family.clone(),
                        year,
                        manufacturer: reference.clone(),
                        created_at: now,
                        updated_at: now,
                    })
                    .await?;
                Ok(WriteOutcome::Created(created))
            }
        }
    }
}
