use crate::domain::errors::DomainResult;
use crate::domain::manufacturer::entity::{
    AirplaneSlugFn, Manufacturer, ManufacturerUpdate, ManufacturerWithAirplanes, NewManufacturer,
    Resolution,
};
use crate::domain::manufacturer::value_objects::ManufacturerId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait ManufacturerRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Manufacturer>>;

    async fn find_with_airplanes(&self, slug: &Slug)
    -> DomainResult<Option<ManufacturerWithAirplanes>>;

    async fn list(&self) -> DomainResult<Vec<ManufacturerWithAirplanes>>;

    /// Case-insensitive substring match on name or slug.
    async fn search(&self, keyword: &str) -> DomainResult<Vec<Manufacturer>>;

    /// Returns the row holding `new.slug`, inserting it when absent. A lost race
    /// against a concurrent insert surfaces as `TransientUniqueViolation`.
    async fn find_or_create(&self, new: NewManufacturer) -> DomainResult<Resolution<Manufacturer>>;

    /// Applies the name/slug change and rewrites every dependent airplane slug
    /// with `airplane_slug` in one transaction. Dependents are read inside that
    /// transaction with the manufacturer row locked, so airplanes written
    /// concurrently are either re-derived here or see the new name.
    async fn update(
        &self,
        update: ManufacturerUpdate,
        airplane_slug: &AirplaneSlugFn,
    ) -> DomainResult<Manufacturer>;

    async fn count_airplanes(&self, id: ManufacturerId) -> DomainResult<u64>;

    async fn delete(&self, slug: &Slug) -> DomainResult<Manufacturer>;
}
