// src/infrastructure/repositories/postgres_airplane.rs
use super::postgres_manufacturer::{ManufacturerRow, connect_or_create};
use super::{contains_pattern, map_sqlx, map_sqlx_dependent_write};
use crate::domain::airplane::{
    Airplane, AirplaneFamily, AirplaneId, AirplaneRepository, AirplaneUpdate, AirplaneYear,
    NewAirplane,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::manufacturer::{Manufacturer, ManufacturerId, NewManufacturer};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};

const AIRPLANE_SELECT: &str = "SELECT a.id, a.slug, a.family, a.year, a.created_at, a.updated_at,
        m.id AS manufacturer_id, m.slug AS manufacturer_slug, m.name AS manufacturer_name,
        m.created_at AS manufacturer_created_at, m.updated_at AS manufacturer_updated_at
     FROM airplanes a
     JOIN manufacturers m ON m.id = a.manufacturer_id";

#[derive(Clone)]
pub struct PostgresAirplaneRepository {
    pool: PgPool,
}

impl PostgresAirplaneRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AirplaneRow {
    id: i64,
    slug: String,
    family: String,
    year: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    manufacturer_id: i64,
    manufacturer_slug: String,
    manufacturer_name: String,
    manufacturer_created_at: DateTime<Utc>,
    manufacturer_updated_at: DateTime<Utc>,
}

impl TryFrom<AirplaneRow> for Airplane {
    type Error = DomainError;

    fn try_from(row: AirplaneRow) -> Result<Self, Self::Error> {
        let manufacturer = Manufacturer::try_from(ManufacturerRow {
            id: row.manufacturer_id,
            slug: row.manufacturer_slug,
            name: row.manufacturer_name,
            created_at: row.manufacturer_created_at,
            updated_at: row.manufacturer_updated_at,
        })?;

        Ok(Self {
            id: AirplaneId::new(row.id)?,
            slug: Slug::new(row.slug)?,
            family: AirplaneFamily::new(row.family)?,
            year: row.year.map(AirplaneYear::from_stored).transpose()?,
            manufacturer,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

async fn fetch_by_id(conn: &mut PgConnection, id: i64) -> DomainResult<Airplane> {
    let row = sqlx::query_as::<_, AirplaneRow>(&format!("{AIRPLANE_SELECT} WHERE a.id = $1"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("airplane not found".into()))?;

    Airplane::try_from(row)
}

fn collect_rows(rows: Vec<AirplaneRow>) -> DomainResult<Vec<Airplane>> {
    rows.into_iter().map(Airplane::try_from).collect()
}

#[async_trait]
impl AirplaneRepository for PostgresAirplaneRepository {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Airplane>> {
        let row = sqlx::query_as::<_, AirplaneRow>(&format!("{AIRPLANE_SELECT} WHERE a.slug = $1"))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Airplane::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Airplane>> {
        let rows = sqlx::query_as::<_, AirplaneRow>(&format!("{AIRPLANE_SELECT} ORDER BY a.slug"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        collect_rows(rows)
    }

    async fn list_by_manufacturer(&self, id: ManufacturerId) -> DomainResult<Vec<Airplane>> {
        let rows = sqlx::query_as::<_, AirplaneRow>(&format!(
            "{AIRPLANE_SELECT} WHERE a.manufacturer_id = $1 ORDER BY a.slug"
        ))
        .bind(i64::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        collect_rows(rows)
    }

    async fn search(&self, keyword: &str) -> DomainResult<Vec<Airplane>> {
        let pattern = contains_pattern(keyword);
        let rows = sqlx::query_as::<_, AirplaneRow>(&format!(
            "{AIRPLANE_SELECT}
             WHERE a.family ILIKE $1 OR a.slug ILIKE $1 OR m.name ILIKE $1 OR m.slug ILIKE $1
             ORDER BY a.slug"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        collect_rows(rows)
    }

    async fn insert(&self, airplane: NewAirplane) -> DomainResult<Airplane> {
        let NewAirplane {
            slug,
            family,
            year,
            manufacturer,
            created_at,
            updated_at,
        } = airplane;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let parent = connect_or_create(
            &mut *tx,
            &NewManufacturer::from_reference(&manufacturer, created_at),
        )
        .await?
        .into_inner();

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO airplanes (slug, family, year, manufacturer_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(slug.as_str())
        .bind(family.as_str())
        .bind(year.map(AirplaneYear::value))
        .bind(parent.id)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx_dependent_write)?;

        let created = fetch_by_id(&mut *tx, id).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, update: AirplaneUpdate) -> DomainResult<Airplane> {
        let AirplaneUpdate {
            id,
            slug,
            family,
            year,
            manufacturer,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let parent = connect_or_create(
            &mut *tx,
            &NewManufacturer::from_reference(&manufacturer, updated_at),
        )
        .await?
        .into_inner();

        let result = sqlx::query(
            "UPDATE airplanes
             SET slug = $1, family = $2, year = $3, manufacturer_id = $4, updated_at = $5
             WHERE id = $6",
        )
        .bind(slug.as_str())
        .bind(family.as_str())
        .bind(year.map(AirplaneYear::value))
        .bind(parent.id)
        .bind(updated_at)
        .bind(i64::from(id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_dependent_write)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("airplane not found".into()));
        }

        let updated = fetch_by_id(&mut *tx, i64::from(id)).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(updated)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<Airplane> {
        let row = sqlx::query_as::<_, AirplaneRow>(
            "WITH deleted AS (DELETE FROM airplanes WHERE slug = $1 RETURNING *)
             SELECT a.id, a.slug, a.family, a.year, a.created_at, a.updated_at,
                    m.id AS manufacturer_id, m.slug AS manufacturer_slug, m.name AS manufacturer_name,
                    m.created_at AS manufacturer_created_at, m.updated_at AS manufacturer_updated_at
             FROM deleted a
             JOIN manufacturers m ON m.id = a.manufacturer_id",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("airplane not found".into()))?;

        Airplane::try_from(row)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM airplanes")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}
