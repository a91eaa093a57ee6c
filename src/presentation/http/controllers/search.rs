use crate::application::{dto::SearchResultsDto, queries::search::SearchQuery};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Keyword matched case-insensitively against names, families and slugs.
    #[serde(default)]
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching airplanes and manufacturers.", body = SearchResultsDto),
        (status = 400, description = "Missing keyword.", body = ErrorResponse)
    ),
    tag = "Search"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchResultsDto>> {
    state
        .services
        .search
        .search(SearchQuery { q: params.q })
        .await
        .into_http()
        .map(Json)
}
