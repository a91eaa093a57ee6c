mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetManufacturerBySlugQuery;
pub use service::ManufacturerQueryService;
