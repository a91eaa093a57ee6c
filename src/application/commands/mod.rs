pub mod airplanes;
pub mod manufacturers;
