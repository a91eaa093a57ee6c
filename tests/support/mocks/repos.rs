// tests/support/mocks/repos.rs
//! In-memory repositories sharing one store, with the same uniqueness and
//! foreign-key behaviour as the Postgres schema.
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use airplanes_api::domain::airplane::{
    Airplane, AirplaneFamily, AirplaneId, AirplaneRepository, AirplaneUpdate, AirplaneYear,
    NewAirplane,
};
use airplanes_api::domain::errors::{DomainError, DomainResult};
use airplanes_api::domain::manufacturer::{
    AirplaneSlugFn, AirplaneSummary, Manufacturer, ManufacturerId, ManufacturerReference, ManufacturerRepository,
    ManufacturerUpdate, ManufacturerWithAirplanes, NewManufacturer, Resolution,
};
use airplanes_api::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Clone)]
struct StoredAirplane {
    id: AirplaneId,
    slug: Slug,
    family: AirplaneFamily,
    year: Option<AirplaneYear>,
    manufacturer_id: ManufacturerId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Default)]
struct Store {
    manufacturers: BTreeMap<i64, Manufacturer>,
    airplanes: BTreeMap<i64, StoredAirplane>,
    next_manufacturer_id: i64,
    next_airplane_id: i64,
    pending_races: usize,
}

impl Store {
    fn manufacturer_by_slug(&self, slug: &Slug) -> Option<&Manufacturer> {
        self.manufacturers.values().find(|m| &m.slug == slug)
    }

    fn airplane_by_slug(&self, slug: &Slug) -> Option<&StoredAirplane> {
        self.airplanes.values().find(|a| &a.slug == slug)
    }

    fn insert_manufacturer(&mut self, new: &NewManufacturer) -> DomainResult<Manufacturer> {
        if self.manufacturer_by_slug(&new.slug).is_some() {
            return Err(DomainError::TransientUniqueViolation(format!(
                "manufacturer slug `{}` already exists",
                new.slug
            )));
        }
        self.next_manufacturer_id += 1;
        let manufacturer = Manufacturer {
            id: ManufacturerId::new(self.next_manufacturer_id)?,
            slug: new.slug.clone(),
            name: new.name.clone(),
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        self.manufacturers
            .insert(self.next_manufacturer_id, manufacturer.clone());
        Ok(manufacturer)
    }

    /// Mirrors the lookup-then-insert done inside a storage transaction. An
    /// injected race lets a competing writer insert the row between the two
    /// steps, so the caller sees the unique violation.
    fn connect_or_create(&mut self, new: &NewManufacturer) -> DomainResult<Resolution<Manufacturer>> {
        if let Some(existing) = self.manufacturer_by_slug(&new.slug) {
            return Ok(Resolution::Existing(existing.clone()));
        }
        if self.pending_races > 0 {
            self.pending_races -= 1;
            self.insert_manufacturer(new)?;
        }
        self.insert_manufacturer(new).map(Resolution::Created)
    }

    fn connect_reference(
        &mut self,
        reference: &ManufacturerReference,
        now: DateTime<Utc>,
    ) -> DomainResult<ManufacturerId> {
        let resolution = self.connect_or_create(&NewManufacturer::from_reference(reference, now))?;
        Ok(resolution.into_inner().id)
    }

    fn hydrate(&self, stored: &StoredAirplane) -> DomainResult<Airplane> {
        let manufacturer = self
            .manufacturers
            .get(&i64::from(stored.manufacturer_id))
            .cloned()
            .ok_or_else(|| DomainError::Persistence("dangling manufacturer id".into()))?;
        Ok(Airplane {
            id: stored.id,
            slug: stored.slug.clone(),
            family: stored.family.clone(),
            year: stored.year,
            manufacturer,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        })
    }

    fn sorted_airplanes(&self, keep: impl Fn(&StoredAirplane) -> bool) -> DomainResult<Vec<Airplane>> {
        let mut airplanes = self
            .airplanes
            .values()
            .filter(|a| keep(a))
            .map(|a| self.hydrate(a))
            .collect::<DomainResult<Vec<_>>>()?;
        airplanes.sort_by(|a, b| a.slug.as_str().cmp(b.slug.as_str()));
        Ok(airplanes)
    }

    fn summaries(&self, id: ManufacturerId) -> Vec<AirplaneSummary> {
        let mut summaries: Vec<AirplaneSummary> = self
            .airplanes
            .values()
            .filter(|a| a.manufacturer_id == id)
            .map(|a| AirplaneSummary {
                id: a.id,
                slug: a.slug.clone(),
                family: a.family.clone(),
            })
            .collect();
        summaries.sort_by(|a, b| a.slug.as_str().cmp(b.slug.as_str()));
        summaries
    }

    fn slug_taken_by_other_airplane(&self, slug: &Slug, id: AirplaneId) -> bool {
        self.airplanes.values().any(|a| &a.slug == slug && a.id != id)
    }
}

fn contains(haystack: &str, keyword: &str) -> bool {
    haystack.to_lowercase().contains(&keyword.to_lowercase())
}

/// Handle to the shared store. Clone it into both repositories.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Store>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.inner.lock().expect("store mutex poisoned")
    }

    /// The next `count` manufacturer creations lose a race against a
    /// concurrent writer that inserts the same slug first.
    pub fn inject_manufacturer_races(&self, count: usize) {
        self.lock().pending_races = count;
    }

    pub fn manufacturer_count(&self) -> usize {
        self.lock().manufacturers.len()
    }

    pub fn airplane_count(&self) -> usize {
        self.lock().airplanes.len()
    }

    pub fn manufacturer_repo(&self) -> Arc<InMemoryManufacturerRepo> {
        Arc::new(InMemoryManufacturerRepo {
            store: self.clone(),
        })
    }

    pub fn airplane_repo(&self) -> Arc<InMemoryAirplaneRepo> {
        Arc::new(InMemoryAirplaneRepo {
            store: self.clone(),
        })
    }
}

pub struct InMemoryManufacturerRepo {
    store: InMemoryStore,
}

#[async_trait]
impl ManufacturerRepository for InMemoryManufacturerRepo {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Manufacturer>> {
        Ok(self.store.lock().manufacturer_by_slug(slug).cloned())
    }

    async fn find_with_airplanes(
        &self,
        slug: &Slug,
    ) -> DomainResult<Option<ManufacturerWithAirplanes>> {
        let store = self.store.lock();
        Ok(store
            .manufacturer_by_slug(slug)
            .cloned()
            .map(|manufacturer| ManufacturerWithAirplanes {
                airplanes: store.summaries(manufacturer.id),
                manufacturer,
            }))
    }

    async fn list(&self) -> DomainResult<Vec<ManufacturerWithAirplanes>> {
        let store = self.store.lock();
        let mut listed: Vec<ManufacturerWithAirplanes> = store
            .manufacturers
            .values()
            .map(|manufacturer| ManufacturerWithAirplanes {
                airplanes: store.summaries(manufacturer.id),
                manufacturer: manufacturer.clone(),
            })
            .collect();
        listed.sort_by(|a, b| a.manufacturer.slug.as_str().cmp(b.manufacturer.slug.as_str()));
        Ok(listed)
    }

    async fn search(&self, keyword: &str) -> DomainResult<Vec<Manufacturer>> {
        let store = self.store.lock();
        let mut found: Vec<Manufacturer> = store
            .manufacturers
            .values()
            .filter(|m| contains(m.name.as_str(), keyword) || contains(m.slug.as_str(), keyword))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.slug.as_str().cmp(b.slug.as_str()));
        Ok(found)
    }

    async fn find_or_create(&self, new: NewManufacturer) -> DomainResult<Resolution<Manufacturer>> {
        self.store.lock().connect_or_create(&new)
    }

    async fn update(
        &self,
        update: ManufacturerUpdate,
        airplane_slug: &AirplaneSlugFn,
    ) -> DomainResult<Manufacturer> {
        let mut store = self.store.lock();
        let key = i64::from(update.id);
        if !store.manufacturers.contains_key(&key) {
            return Err(DomainError::NotFound("manufacturer not found".into()));
        }
        if store
            .manufacturers
            .values()
            .any(|m| m.slug == update.slug && m.id != update.id)
        {
            return Err(DomainError::TransientUniqueViolation(format!(
                "manufacturer slug `{}` already exists",
                update.slug
            )));
        }

        // Dependents are read under the same lock as the rename; uniqueness
        // is checked once every rewrite is applied.
        let mut airplanes = store.airplanes.clone();
        for airplane in airplanes.values_mut() {
            if airplane.manufacturer_id != update.id {
                continue;
            }
            let slug = airplane_slug(&airplane.family)?;
            if slug != airplane.slug {
                airplane.slug = slug;
                airplane.updated_at = update.updated_at;
            }
        }
        let mut seen = std::collections::HashSet::new();
        if !airplanes.values().all(|a| seen.insert(a.slug.clone())) {
            return Err(DomainError::TransientUniqueViolation(
                "airplane slug already exists".into(),
            ));
        }
        store.airplanes = airplanes;

        let manufacturer = store
            .manufacturers
            .get_mut(&key)
            .ok_or_else(|| DomainError::NotFound("manufacturer not found".into()))?;
        manufacturer.rename(update.name, update.slug, update.updated_at);
        Ok(manufacturer.clone())
    }

    async fn count_airplanes(&self, id: ManufacturerId) -> DomainResult<u64> {
        let store = self.store.lock();
        Ok(store
            .airplanes
            .values()
            .filter(|a| a.manufacturer_id == id)
            .count() as u64)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<Manufacturer> {
        let mut store = self.store.lock();
        let manufacturer = store
            .manufacturer_by_slug(slug)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("manufacturer not found".into()))?;
        if store
            .airplanes
            .values()
            .any(|a| a.manufacturer_id == manufacturer.id)
        {
            return Err(DomainError::HasDependents(
                "manufacturer is still referenced by airplanes".into(),
            ));
        }
        store.manufacturers.remove(&i64::from(manufacturer.id));
        Ok(manufacturer)
    }
}

pub struct InMemoryAirplaneRepo {
    store: InMemoryStore,
}

#[async_trait]
impl AirplaneRepository for InMemoryAirplaneRepo {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Airplane>> {
        let store = self.store.lock();
        store
            .airplane_by_slug(slug)
            .map(|stored| store.hydrate(stored))
            .transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Airplane>> {
        self.store.lock().sorted_airplanes(|_| true)
    }

    async fn list_by_manufacturer(&self, id: ManufacturerId) -> DomainResult<Vec<Airplane>> {
        self.store.lock().sorted_airplanes(|a| a.manufacturer_id == id)
    }

    async fn search(&self, keyword: &str) -> DomainResult<Vec<Airplane>> {
        let store = self.store.lock();
        let matching: Vec<Airplane> = store
            .sorted_airplanes(|_| true)?
            .into_iter()
            .filter(|a| {
                contains(a.family.as_str(), keyword)
                    || contains(a.slug.as_str(), keyword)
                    || contains(a.manufacturer.name.as_str(), keyword)
                    || contains(a.manufacturer.slug.as_str(), keyword)
            })
            .collect();
        Ok(matching)
    }

    async fn insert(&self, airplane: NewAirplane) -> DomainResult<Airplane> {
        let mut store = self.store.lock();
        // Nothing is written until every check passed, like a rolled back
        // transaction.
        if store.airplane_by_slug(&airplane.slug).is_some() {
            return Err(DomainError::TransientUniqueViolation(format!(
                "airplane slug `{}` already exists",
                airplane.slug
            )));
        }
        let manufacturer_id = store.connect_reference(&airplane.manufacturer, airplane.created_at)?;

        store.next_airplane_id += 1;
        let stored = StoredAirplane {
            id: AirplaneId::new(store.next_airplane_id)?,
            slug: airplane.slug,
            family: airplane.family,
            year: airplane.year,
            manufacturer_id,
            created_at: airplane.created_at,
            updated_at: airplane.updated_at,
        };
        let key = store.next_airplane_id;
        store.airplanes.insert(key, stored.clone());
        store.hydrate(&stored)
    }

    async fn update(&self, update: AirplaneUpdate) -> DomainResult<Airplane> {
        let mut store = self.store.lock();
        let key = i64::from(update.id);
        if !store.airplanes.contains_key(&key) {
            return Err(DomainError::NotFound("airplane not found".into()));
        }
        if store.slug_taken_by_other_airplane(&update.slug, update.id) {
            return Err(DomainError::TransientUniqueViolation(format!(
                "airplane slug `{}` already exists",
                update.slug
            )));
        }
        let manufacturer_id = store.connect_reference(&update.manufacturer, update.updated_at)?;

        let stored = store
            .airplanes
            .get_mut(&key)
            .ok_or_else(|| DomainError::NotFound("airplane not found".into()))?;
        stored.slug = update.slug;
        stored.family = update.family;
        stored.year = update.year;
        stored.manufacturer_id = manufacturer_id;
        stored.updated_at = update.updated_at;
        let stored = stored.clone();
        store.hydrate(&stored)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<Airplane> {
        let mut store = self.store.lock();
        let stored = store
            .airplane_by_slug(slug)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("airplane not found".into()))?;
        let airplane = store.hydrate(&stored)?;
        store.airplanes.remove(&i64::from(stored.id));
        Ok(airplane)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let mut store = self.store.lock();
        let count = store.airplanes.len() as u64;
        store.airplanes.clear();
        Ok(count)
    }
}
