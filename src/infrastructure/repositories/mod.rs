// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_airplane;
mod postgres_manufacturer;

pub use error::{contains_pattern, map_sqlx, map_sqlx_dependent_write};
pub use postgres_airplane::PostgresAirplaneRepository;
pub use postgres_manufacturer::PostgresManufacturerRepository;
