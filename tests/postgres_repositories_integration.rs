use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use airplanes_api::application::commands::airplanes::CreateAirplaneCommand;
use airplanes_api::application::commands::manufacturers::UpdateManufacturerCommand;
use airplanes_api::application::services::ApplicationServices;
use airplanes_api::domain::airplane::AirplaneRepository;
use airplanes_api::domain::errors::DomainError;
use airplanes_api::domain::manufacturer::{ManufacturerId, ManufacturerRepository};
use airplanes_api::domain::slug::Slug;
use airplanes_api::infrastructure::repositories::{
    PostgresAirplaneRepository, PostgresManufacturerRepository,
};
use airplanes_api::infrastructure::{database, time::SystemClock, util::DefaultSlugGenerator};
use sqlx::PgPool;

struct Harness {
    pool: PgPool,
    airplanes: Arc<dyn AirplaneRepository>,
    manufacturers: Arc<dyn ManufacturerRepository>,
    services: ApplicationServices,
    tag: String,
}

impl Harness {
    /// Manufacturer name unique to this run; its slug starts with `self.tag`.
    fn manufacturer(&self, suffix: &str) -> String {
        format!("{} {suffix}", self.tag.replace('-', " "))
    }

    async fn cleanup(&self) {
        let pattern = format!("{}%", self.tag);
        sqlx::query(
            "DELETE FROM airplanes WHERE manufacturer_id IN \
             (SELECT id FROM manufacturers WHERE slug LIKE $1)",
        )
        .bind(&pattern)
        .execute(&self.pool)
        .await
        .expect("cleanup airplanes");
        sqlx::query("DELETE FROM manufacturers WHERE slug LIKE $1")
            .bind(&pattern)
            .execute(&self.pool)
            .await
            .expect("cleanup manufacturers");
    }
}

async fn harness(label: &str) -> Option<Harness> {
    // Run only when explicitly enabled to avoid requiring Postgres in all environments
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return None;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = database::init_pool(&database_url, 5).await.expect("init pool");
    database::run_migrations(&pool).await.expect("run migrations");

    let airplanes: Arc<dyn AirplaneRepository> =
        Arc::new(PostgresAirplaneRepository::new(pool.clone()));
    let manufacturers: Arc<dyn ManufacturerRepository> =
        Arc::new(PostgresManufacturerRepository::new(pool.clone()));
    let services = ApplicationServices::new(
        Arc::clone(&airplanes),
        Arc::clone(&manufacturers),
        Arc::new(SystemClock),
        Arc::new(DefaultSlugGenerator),
    );

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_nanos();
    let tag = format!("itest-{label}-{}-{nanos}", std::process::id());

    Some(Harness {
        pool,
        airplanes,
        manufacturers,
        services,
        tag,
    })
}

fn create(manufacturer: &str, family: &str, year: Option<i32>) -> CreateAirplaneCommand {
    CreateAirplaneCommand {
        manufacturer: manufacturer.into(),
        family: family.into(),
        year,
    }
}

#[tokio::test]
async fn create_with_new_manufacturer_links_both_rows() {
    let Some(h) = harness("create").await else {
        return;
    };
    let name = h.manufacturer("Aero");

    let outcome = h
        .services
        .airplane_commands
        .create_airplane(create(&name, "A320", Some(1988)))
        .await
        .expect("create airplane");
    assert!(outcome.was_created());
    let airplane = outcome.into_inner();
    assert_eq!(airplane.slug, format!("{}-aero-a320", h.tag));
    assert_eq!(airplane.manufacturer.name, name);

    let manufacturer_id = ManufacturerId::new(airplane.manufacturer.id).expect("id");
    let listed = h
        .airplanes
        .list_by_manufacturer(manufacturer_id)
        .await
        .expect("list by manufacturer");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].year.map(i32::from), Some(1988));

    h.cleanup().await;
}

#[tokio::test]
async fn concurrent_creates_share_one_new_manufacturer() {
    let Some(h) = harness("race").await else {
        return;
    };
    let name = h.manufacturer("Aero");

    let (first, second) = tokio::join!(
        h.services
            .airplane_commands
            .create_airplane(create(&name, "A320", None)),
        h.services
            .airplane_commands
            .create_airplane(create(&name, "A350", None)),
    );
    let first = first.expect("first create").into_inner();
    let second = second.expect("second create").into_inner();
    assert_eq!(first.manufacturer.id, second.manufacturer.id);

    let slug = Slug::new(format!("{}-aero", h.tag)).expect("slug");
    let detail = h
        .manufacturers
        .find_with_airplanes(&slug)
        .await
        .expect("find manufacturer")
        .expect("manufacturer exists");
    assert_eq!(detail.airplanes.len(), 2);

    h.cleanup().await;
}

#[tokio::test]
async fn rename_rewrites_dependent_airplane_slugs() {
    let Some(h) = harness("rename").await else {
        return;
    };
    let name = h.manufacturer("Aero");
    for family in ["A320", "A380"] {
        h.services
            .airplane_commands
            .create_airplane(create(&name, family, None))
            .await
            .expect("seed airplane");
    }

    let renamed = h
        .services
        .manufacturer_commands
        .update_manufacturer(UpdateManufacturerCommand {
            slug: format!("{}-aero", h.tag),
            name: h.manufacturer("Industrie"),
        })
        .await
        .expect("rename");
    assert_eq!(renamed.slug, format!("{}-industrie", h.tag));

    let manufacturer_id = ManufacturerId::new(renamed.id).expect("id");
    let slugs: Vec<String> = h
        .airplanes
        .list_by_manufacturer(manufacturer_id)
        .await
        .expect("list by manufacturer")
        .into_iter()
        .map(|a| a.slug.into_inner())
        .collect();
    assert_eq!(
        slugs,
        [
            format!("{}-industrie-a320", h.tag),
            format!("{}-industrie-a380", h.tag),
        ]
    );

    h.cleanup().await;
}

#[tokio::test]
async fn deleting_a_referenced_manufacturer_reports_dependents() {
    let Some(h) = harness("delete").await else {
        return;
    };
    let name = h.manufacturer("Aero");
    h.services
        .airplane_commands
        .create_airplane(create(&name, "A320", None))
        .await
        .expect("seed airplane");

    let slug = Slug::new(format!("{}-aero", h.tag)).expect("slug");
    let err = h
        .manufacturers
        .delete(&slug)
        .await
        .expect_err("foreign key must reject the delete");
    assert!(matches!(err, DomainError::HasDependents(_)), "got {err:?}");
    assert!(
        h.manufacturers
            .find_by_slug(&slug)
            .await
            .expect("find manufacturer")
            .is_some()
    );

    h.cleanup().await;
}
