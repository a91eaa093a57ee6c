// src/domain/manufacturer/services/mod.rs
use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::manufacturer::entity::{Manufacturer, NewManufacturer, Resolution};
use crate::domain::manufacturer::repository::ManufacturerRepository;
use crate::domain::manufacturer::value_objects::{ManufacturerName, ManufacturerReference};
use crate::domain::slug::SlugDeriver;

/// Turns manufacturer names into connect-or-create references and resolves
/// them against storage.
pub struct ManufacturerResolver {
    repo: Arc<dyn ManufacturerRepository>,
    deriver: Arc<SlugDeriver>,
}

impl ManufacturerResolver {
    pub fn new(repo: Arc<dyn ManufacturerRepository>, deriver: Arc<SlugDeriver>) -> Self {
        Self { repo, deriver }
    }

    /// Validates a manufacturer name referenced by a dependent write. Fails with
    /// `InvalidReference` before any storage access.
    pub fn reference(&self, name: &str) -> DomainResult<ManufacturerReference> {
        let name = ManufacturerName::new(name)
            .map_err(|_| DomainError::InvalidReference("manufacturer name is required".into()))?;
        let slug = self
            .deriver
            .derive(&[name.as_str()])
            .map_err(|err| DomainError::InvalidReference(err.to_string()))?;
        Ok(ManufacturerReference { slug, name })
    }

    /// Finds the referenced manufacturer or creates it. A unique violation on
    /// creation means a concurrent writer inserted it first; the lookup runs once more.
    pub async fn resolve(
        &self,
        reference: &ManufacturerReference,
        now: DateTime<Utc>,
    ) -> DomainResult<Resolution<Manufacturer>> {
        retry_on_unique_violation(|| {
            self.repo
                .find_or_create(NewManufacturer::from_reference(reference, now))
        })
        .await
    }
}

/// Runs `op`, and runs it exactly once more if it lost a unique race.
pub async fn retry_on_unique_violation<T, F, Fut>(mut op: F) -> DomainResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    match op().await {
        Err(err) if err.is_transient() => {
            tracing::warn!(error = %err, "unique race on write, retrying lookup");
            op().await
        }
        other => other,
    }
}
