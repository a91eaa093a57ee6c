mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetAirplaneBySlugQuery;
pub use service::AirplaneQueryService;
