// src/infrastructure/repositories/postgres_manufacturer.rs
use super::{contains_pattern, map_sqlx};
use crate::domain::airplane::{AirplaneFamily, AirplaneId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::manufacturer::{
    AirplaneSlugFn, AirplaneSummary, Manufacturer, ManufacturerId, ManufacturerName,
    ManufacturerRepository, ManufacturerUpdate, ManufacturerWithAirplanes, NewManufacturer,
    Resolution,
};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};
use std::collections::HashMap;

const MANUFACTURER_COLUMNS: &str = "id, slug, name, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresManufacturerRepository {
    pool: PgPool,
}

impl PostgresManufacturerRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ManufacturerRow {
    pub(super) id: i64,
    pub(super) slug: String,
    pub(super) name: String,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
}

impl TryFrom<ManufacturerRow> for Manufacturer {
    type Error = DomainError;

    fn try_from(row: ManufacturerRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ManufacturerId::new(row.id)?,
            slug: Slug::new(row.slug)?,
            name: ManufacturerName::new(row.name)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct DependentRow {
    id: i64,
    slug: String,
    family: String,
}

#[derive(Debug, FromRow)]
struct AirplaneSummaryRow {
    id: i64,
    slug: String,
    family: String,
    manufacturer_id: i64,
}

impl TryFrom<AirplaneSummaryRow> for AirplaneSummary {
    type Error = DomainError;

    fn try_from(row: AirplaneSummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AirplaneId::new(row.id)?,
            slug: Slug::new(row.slug)?,
            family: AirplaneFamily::new(row.family)?,
        })
    }
}

/// Looks the manufacturer up by slug and inserts it when missing. Runs on the
/// caller's connection so airplane writes can use it inside their transaction;
/// the row stays share-locked until that transaction ends, so a rename cannot
/// interleave with the dependent write.
pub(super) async fn connect_or_create(
    conn: &mut PgConnection,
    new: &NewManufacturer,
) -> DomainResult<Resolution<ManufacturerRow>> {
    let existing = sqlx::query_as::<_, ManufacturerRow>(&format!(
        "SELECT {MANUFACTURER_COLUMNS} FROM manufacturers WHERE slug = $1 FOR SHARE"
    ))
    .bind(new.slug.as_str())
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    if let Some(row) = existing {
        return Ok(Resolution::Existing(row));
    }

    let row = sqlx::query_as::<_, ManufacturerRow>(&format!(
        "INSERT INTO manufacturers (slug, name, created_at, updated_at)
         VALUES ($1, $2, $3, $4)
         RETURNING {MANUFACTURER_COLUMNS}"
    ))
    .bind(new.slug.as_str())
    .bind(new.name.as_str())
    .bind(new.created_at)
    .bind(new.updated_at)
    .fetch_one(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    tracing::debug!(slug = %new.slug, "manufacturer created on demand");
    Ok(Resolution::Created(row))
}

impl PostgresManufacturerRepository {
    async fn summaries_for(
        &self,
        manufacturer_id: Option<i64>,
    ) -> DomainResult<HashMap<i64, Vec<AirplaneSummary>>> {
        let rows = match manufacturer_id {
            Some(id) => {
                sqlx::query_as::<_, AirplaneSummaryRow>(
                    "SELECT id, slug, family, manufacturer_id FROM airplanes
                     WHERE manufacturer_id = $1 ORDER BY slug",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, AirplaneSummaryRow>(
                    "SELECT id, slug, family, manufacturer_id FROM airplanes ORDER BY slug",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx)?;

        let mut grouped: HashMap<i64, Vec<AirplaneSummary>> = HashMap::new();
        for row in rows {
            let owner = row.manufacturer_id;
            grouped
                .entry(owner)
                .or_default()
                .push(AirplaneSummary::try_from(row)?);
        }
        Ok(grouped)
    }
}

#[async_trait]
impl ManufacturerRepository for PostgresManufacturerRepository {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Manufacturer>> {
        let row = sqlx::query_as::<_, ManufacturerRow>(&format!(
            "SELECT {MANUFACTURER_COLUMNS} FROM manufacturers WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Manufacturer::try_from).transpose()
    }

    async fn find_with_airplanes(
        &self,
        slug: &Slug,
    ) -> DomainResult<Option<ManufacturerWithAirplanes>> {
        let Some(manufacturer) = self.find_by_slug(slug).await? else {
            return Ok(None);
        };

        let id = i64::from(manufacturer.id);
        let airplanes = self
            .summaries_for(Some(id))
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(Some(ManufacturerWithAirplanes {
            manufacturer,
            airplanes,
        }))
    }

    async fn list(&self) -> DomainResult<Vec<ManufacturerWithAirplanes>> {
        let rows = sqlx::query_as::<_, ManufacturerRow>(&format!(
            "SELECT {MANUFACTURER_COLUMNS} FROM manufacturers ORDER BY slug"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut summaries = self.summaries_for(None).await?;
        rows.into_iter()
            .map(|row| -> DomainResult<ManufacturerWithAirplanes> {
                let airplanes = summaries.remove(&row.id).unwrap_or_default();
                Ok(ManufacturerWithAirplanes {
                    manufacturer: Manufacturer::try_from(row)?,
                    airplanes,
                })
            })
            .collect()
    }

    async fn search(&self, keyword: &str) -> DomainResult<Vec<Manufacturer>> {
        let pattern = contains_pattern(keyword);
        let rows = sqlx::query_as::<_, ManufacturerRow>(&format!(
            "SELECT {MANUFACTURER_COLUMNS} FROM manufacturers
             WHERE name ILIKE $1 OR slug ILIKE $1
             ORDER BY slug"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Manufacturer::try_from).collect()
    }

    async fn find_or_create(&self, new: NewManufacturer) -> DomainResult<Resolution<Manufacturer>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        match connect_or_create(&mut *conn, &new).await? {
            Resolution::Existing(row) => Ok(Resolution::Existing(row.try_into()?)),
            Resolution::Created(row) => Ok(Resolution::Created(row.try_into()?)),
        }
    }

    async fn update(
        &self,
        update: ManufacturerUpdate,
        airplane_slug: &AirplaneSlugFn,
    ) -> DomainResult<Manufacturer> {
        let ManufacturerUpdate {
            id,
            slug,
            name,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Blocks airplane writes that hold this row `FOR SHARE` until commit.
        sqlx::query("SELECT id FROM manufacturers WHERE id = $1 FOR UPDATE")
            .bind(i64::from(id))
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("manufacturer not found".into()))?;

        sqlx::query("SET CONSTRAINTS airplanes_slug_key DEFERRED")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ManufacturerRow>(&format!(
            "UPDATE manufacturers SET slug = $1, name = $2, updated_at = $3
             WHERE id = $4
             RETURNING {MANUFACTURER_COLUMNS}"
        ))
        .bind(slug.as_str())
        .bind(name.as_str())
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let dependents = sqlx::query_as::<_, DependentRow>(
            "SELECT id, slug, family FROM airplanes WHERE manufacturer_id = $1 ORDER BY id",
        )
        .bind(i64::from(id))
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for dependent in dependents {
            let derived = airplane_slug(&AirplaneFamily::new(dependent.family)?)?;
            if derived.as_str() == dependent.slug {
                continue;
            }
            sqlx::query("UPDATE airplanes SET slug = $1, updated_at = $2 WHERE id = $3")
                .bind(derived.as_str())
                .bind(updated_at)
                .bind(dependent.id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Manufacturer::try_from(row)
    }

    async fn count_airplanes(&self, id: ManufacturerId) -> DomainResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM airplanes WHERE manufacturer_id = $1")
                .bind(i64::from(id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        u64::try_from(count).map_err(|err| DomainError::Persistence(err.to_string()))
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<Manufacturer> {
        let row = sqlx::query_as::<_, ManufacturerRow>(&format!(
            "DELETE FROM manufacturers WHERE slug = $1 RETURNING {MANUFACTURER_COLUMNS}"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("manufacturer not found".into()))?;

        Manufacturer::try_from(row)
    }
}
