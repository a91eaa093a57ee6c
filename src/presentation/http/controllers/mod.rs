// src/presentation/http/controllers/mod.rs
pub mod airplanes;
pub mod manufacturers;
pub mod search;

use crate::application::dto::WriteOutcome;
use axum::{Json, http::StatusCode};

/// `201 Created` for a fresh row, `200 OK` when an upsert overwrote an existing one.
pub(crate) fn write_response<T>(outcome: WriteOutcome<T>) -> (StatusCode, Json<T>) {
    let status = if outcome.was_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    (status, Json(outcome.into_inner()))
}
