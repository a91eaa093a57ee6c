pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{
    AirplaneSlugFn, AirplaneSummary, Manufacturer, ManufacturerUpdate,
    ManufacturerWithAirplanes, NewManufacturer, Resolution,
};
pub use repository::ManufacturerRepository;
pub use services::{ManufacturerResolver, retry_on_unique_violation};
pub use value_objects::{ManufacturerId, ManufacturerName, ManufacturerReference};
