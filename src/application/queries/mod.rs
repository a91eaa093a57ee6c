pub mod airplanes;
pub mod manufacturers;
pub mod search;
