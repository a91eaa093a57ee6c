// src/bin/seed.rs
use airplanes_api::application::{
    commands::airplanes::CreateAirplaneCommand,
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use airplanes_api::config::AppConfig;
use airplanes_api::domain::{airplane::AirplaneRepository, manufacturer::ManufacturerRepository};
use airplanes_api::infrastructure::{
    database,
    repositories::{PostgresAirplaneRepository, PostgresManufacturerRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use anyhow::{Result, anyhow};
use std::sync::Arc;

const AIRPLANES: [(&str, &str, i32); 6] = [
    ("Airbus", "A320", 1988),
    ("Boeing", "B737", 1967),
    ("Boeing", "B747", 1999),
    ("Airbus", "A380", 2000),
    ("Embraer", "E190", 2000),
    ("Bombardier", "CRJ", 2000),
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("info,sqlx=warn"))
        .init();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let airplane_repo: Arc<dyn AirplaneRepository> =
        Arc::new(PostgresAirplaneRepository::new(pool.clone()));
    let manufacturer_repo: Arc<dyn ManufacturerRepository> =
        Arc::new(PostgresManufacturerRepository::new(pool));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let services = ApplicationServices::new(airplane_repo, manufacturer_repo, clock, slugger);

    let mut created = 0_usize;
    for (manufacturer, family, year) in AIRPLANES {
        let command = CreateAirplaneCommand::builder()
            .manufacturer(manufacturer)
            .family(family)
            .year(year)
            .build()
            .map_err(|msg| anyhow!(msg))?;
        let outcome = services.airplane_commands.create_airplane(command).await?;
        if outcome.was_created() {
            created += 1;
        }
        let airplane = outcome.into_inner();
        println!("{} ({})", airplane.slug, airplane.manufacturer.slug);
    }

    println!(
        "seeded {} airplanes ({created} new)",
        AIRPLANES.len()
    );
    Ok(())
}
