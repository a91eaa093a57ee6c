mod service;

pub use service::{SearchQuery, SearchQueryService};
