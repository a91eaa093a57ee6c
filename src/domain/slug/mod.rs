pub mod services;
pub mod value_objects;

pub use services::SlugDeriver;
pub use value_objects::{Slug, source_fields_match};
