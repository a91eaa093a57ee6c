// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::airplanes::list_airplanes,
        crate::presentation::http::controllers::airplanes::get_airplane_by_slug,
        crate::presentation::http::controllers::airplanes::create_airplane,
        crate::presentation::http::controllers::airplanes::update_airplane,
        crate::presentation::http::controllers::airplanes::delete_airplane,
        crate::presentation::http::controllers::airplanes::delete_all_airplanes,
        crate::presentation::http::controllers::manufacturers::list_manufacturers,
        crate::presentation::http::controllers::manufacturers::get_manufacturer_by_slug,
        crate::presentation::http::controllers::manufacturers::create_manufacturer,
        crate::presentation::http::controllers::manufacturers::update_manufacturer,
        crate::presentation::http::controllers::manufacturers::delete_manufacturer,
        crate::presentation::http::controllers::search::search,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::airplanes::CreateAirplaneRequest,
            crate::presentation::http::controllers::airplanes::UpdateAirplaneRequest,
            crate::presentation::http::controllers::manufacturers::ManufacturerRequest,
            crate::application::dto::AirplaneDto,
            crate::application::dto::DeleteAllAirplanesDto,
            crate::application::dto::ManufacturerDto,
            crate::application::dto::AirplaneSummaryDto,
            crate::application::dto::ManufacturerWithAirplanesDto,
            crate::application::dto::SearchResultsDto
        )
    ),
    tags(
        (name = "Airplanes", description = "Airplane endpoints keyed by manufacturer and family slug"),
        (name = "Manufacturers", description = "Manufacturer endpoints keyed by name slug"),
        (name = "Search", description = "Keyword search across airplanes and manufacturers"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Airplanes API",
        description = "Airplanes and manufacturers addressed by derived slugs",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path_from_env() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
