// src/application/commands/airplanes/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateAirplaneCommand, CreateAirplaneCommandBuilder};
pub use delete::DeleteAirplaneCommand;
pub use service::AirplaneCommandService;
pub use update::UpdateAirplaneCommand;
