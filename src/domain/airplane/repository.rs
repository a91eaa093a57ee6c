use crate::domain::airplane::entity::{Airplane, AirplaneUpdate, NewAirplane};
use crate::domain::errors::DomainResult;
use crate::domain::manufacturer::ManufacturerId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait AirplaneRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Airplane>>;

    async fn list(&self) -> DomainResult<Vec<Airplane>>;

    async fn list_by_manufacturer(&self, id: ManufacturerId) -> DomainResult<Vec<Airplane>>;

    /// Case-insensitive substring match on family, slug, or the manufacturer's
    /// name or slug.
    async fn search(&self, keyword: &str) -> DomainResult<Vec<Airplane>>;

    /// Connects or creates the referenced manufacturer and inserts the airplane
    /// as one transaction.
    async fn insert(&self, airplane: NewAirplane) -> DomainResult<Airplane>;

    /// Same connect-or-create guarantee as `insert`; the slug, family, year and
    /// manufacturer link change together.
    async fn update(&self, update: AirplaneUpdate) -> DomainResult<Airplane>;

    async fn delete(&self, slug: &Slug) -> DomainResult<Airplane>;

    async fn delete_all(&self) -> DomainResult<u64>;
}
