// src/presentation/http/controllers/airplanes.rs
use crate::application::{
    commands::airplanes::{CreateAirplaneCommand, DeleteAirplaneCommand, UpdateAirplaneCommand},
    dto::{AirplaneDto, DeleteAllAirplanesDto},
    queries::airplanes::GetAirplaneBySlugQuery,
};
use crate::presentation::http::controllers::write_response;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateAirplaneRequest {
    /// Manufacturer name; created on demand when unknown. A missing value is
    /// rejected by the command like a blank one.
    #[serde(default)]
    #[schema(example = "Airbus")]
    pub manufacturer: String,
    #[serde(default)]
    #[schema(example = "A320")]
    pub family: String,
    #[schema(minimum = 1900, example = 1988)]
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateAirplaneRequest {
    pub manufacturer: Option<String>,
    pub family: Option<String>,
    #[schema(minimum = 1900)]
    pub year: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/airplanes",
    responses(
        (status = 200, description = "All airplanes with their manufacturer.", body = [AirplaneDto]),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Airplanes"
)]
pub async fn list_airplanes(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AirplaneDto>>> {
    state
        .services
        .airplane_queries
        .list_airplanes()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/airplanes/{slug}",
    params(("slug" = String, Path, description = "Airplane slug, e.g. `airbus-a320`.")),
    responses(
        (status = 200, description = "Airplane found.", body = AirplaneDto),
        (status = 404, description = "Airplane not found.", body = ErrorResponse)
    ),
    tag = "Airplanes"
)]
pub async fn get_airplane_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<AirplaneDto>> {
    state
        .services
        .airplane_queries
        .get_airplane_by_slug(GetAirplaneBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/airplanes",
    request_body = CreateAirplaneRequest,
    responses(
        (status = 201, description = "Airplane created.", body = AirplaneDto),
        (status = 200, description = "Existing airplane with the same manufacturer and family overwritten.", body = AirplaneDto),
        (status = 400, description = "Invalid fields or manufacturer reference.", body = ErrorResponse),
        (status = 409, description = "Slug already used by a different airplane.", body = ErrorResponse)
    ),
    tag = "Airplanes"
)]
pub async fn create_airplane(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateAirplaneRequest>,
) -> HttpResult<(StatusCode, Json<AirplaneDto>)> {
    let command = CreateAirplaneCommand {
        manufacturer: payload.manufacturer,
        family: payload.family,
        year: payload.year,
    };

    state
        .services
        .airplane_commands
        .create_airplane(command)
        .await
        .into_http()
        .map(write_response)
}

#[utoipa::path(
    patch,
    path = "/airplanes/{slug}",
    params(("slug" = String, Path, description = "Current airplane slug.")),
    request_body = UpdateAirplaneRequest,
    responses(
        (status = 200, description = "Airplane updated; the slug follows the new manufacturer and family.", body = AirplaneDto),
        (status = 400, description = "Invalid fields.", body = ErrorResponse),
        (status = 404, description = "Airplane not found.", body = ErrorResponse),
        (status = 409, description = "New slug already used by another airplane.", body = ErrorResponse)
    ),
    tag = "Airplanes"
)]
pub async fn update_airplane(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateAirplaneRequest>,
) -> HttpResult<Json<AirplaneDto>> {
    let command = UpdateAirplaneCommand {
        slug,
        manufacturer: payload.manufacturer,
        family: payload.family,
        year: payload.year,
    };

    state
        .services
        .airplane_commands
        .update_airplane(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/airplanes/{slug}",
    params(("slug" = String, Path, description = "Airplane slug.")),
    responses(
        (status = 200, description = "Airplane deleted.", body = AirplaneDto),
        (status = 404, description = "Airplane not found.", body = ErrorResponse)
    ),
    tag = "Airplanes"
)]
pub async fn delete_airplane(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<AirplaneDto>> {
    state
        .services
        .airplane_commands
        .delete_airplane(DeleteAirplaneCommand { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/airplanes",
    responses(
        (status = 200, description = "All airplanes deleted.", body = DeleteAllAirplanesDto)
    ),
    tag = "Airplanes"
)]
pub async fn delete_all_airplanes(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<DeleteAllAirplanesDto>> {
    state
        .services
        .airplane_commands
        .delete_all_airplanes()
        .await
        .into_http()
        .map(Json)
}
