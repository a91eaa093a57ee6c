// src/application/commands/manufacturers/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateManufacturerCommand;
pub use delete::DeleteManufacturerCommand;
pub use service::ManufacturerCommandService;
pub use update::UpdateManufacturerCommand;
