pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Airplane, AirplaneUpdate, NewAirplane};
pub use repository::AirplaneRepository;
pub use value_objects::{AirplaneFamily, AirplaneId, AirplaneYear};
