// src/presentation/http/controllers/manufacturers.rs
use crate::application::{
    commands::manufacturers::{
        CreateManufacturerCommand, DeleteManufacturerCommand, UpdateManufacturerCommand,
    },
    dto::{ManufacturerDto, ManufacturerWithAirplanesDto},
    queries::manufacturers::GetManufacturerBySlugQuery,
};
use crate::presentation::http::controllers::write_response;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ManufacturerRequest {
    #[schema(example = "Embraer")]
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/manufacturers",
    responses(
        (status = 200, description = "All manufacturers with their airplanes.", body = [ManufacturerWithAirplanesDto])
    ),
    tag = "Manufacturers"
)]
pub async fn list_manufacturers(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ManufacturerWithAirplanesDto>>> {
    state
        .services
        .manufacturer_queries
        .list_manufacturers()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/manufacturers/{slug}",
    params(("slug" = String, Path, description = "Manufacturer slug, e.g. `boeing`.")),
    responses(
        (status = 200, description = "Manufacturer found.", body = ManufacturerWithAirplanesDto),
        (status = 404, description = "Manufacturer not found.", body = ErrorResponse)
    ),
    tag = "Manufacturers"
)]
pub async fn get_manufacturer_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ManufacturerWithAirplanesDto>> {
    state
        .services
        .manufacturer_queries
        .get_manufacturer_by_slug(GetManufacturerBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/manufacturers",
    request_body = ManufacturerRequest,
    responses(
        (status = 201, description = "Manufacturer created.", body = ManufacturerDto),
        (status = 200, description = "Existing manufacturer with the same name overwritten.", body = ManufacturerDto),
        (status = 400, description = "Invalid name.", body = ErrorResponse),
        (status = 409, description = "Slug already used by a different manufacturer.", body = ErrorResponse)
    ),
    tag = "Manufacturers"
)]
pub async fn create_manufacturer(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ManufacturerRequest>,
) -> HttpResult<(StatusCode, Json<ManufacturerDto>)> {
    state
        .services
        .manufacturer_commands
        .create_manufacturer(CreateManufacturerCommand { name: payload.name })
        .await
        .into_http()
        .map(write_response)
}

#[utoipa::path(
    patch,
    path = "/manufacturers/{slug}",
    params(("slug" = String, Path, description = "Current manufacturer slug.")),
    request_body = ManufacturerRequest,
    responses(
        (status = 200, description = "Manufacturer renamed; its airplanes' slugs follow.", body = ManufacturerDto),
        (status = 404, description = "Manufacturer not found.", body = ErrorResponse),
        (status = 409, description = "New slug already used by another manufacturer.", body = ErrorResponse)
    ),
    tag = "Manufacturers"
)]
pub async fn update_manufacturer(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<ManufacturerRequest>,
) -> HttpResult<Json<ManufacturerDto>> {
    let command = UpdateManufacturerCommand {
        slug,
        name: payload.name,
    };

    state
        .services
        .manufacturer_commands
        .update_manufacturer(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/manufacturers/{slug}",
    params(("slug" = String, Path, description = "Manufacturer slug.")),
    responses(
        (status = 200, description = "Manufacturer deleted.", body = ManufacturerDto),
        (status = 404, description = "Manufacturer not found.", body = ErrorResponse),
        (status = 409, description = "Manufacturer still has airplanes.", body = ErrorResponse)
    ),
    tag = "Manufacturers"
)]
pub async fn delete_manufacturer(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ManufacturerDto>> {
    state
        .services
        .manufacturer_commands
        .delete_manufacturer(DeleteManufacturerCommand { slug })
        .await
        .into_http()
        .map(Json)
}
