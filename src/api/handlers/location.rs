//! Handlers for location compose/parse endpoints.

use axum::Json;

use crate::api::dto::location::{ComposeRequest, ComposeResponse, ParseRequest, ParseResponse};
use crate::utils::location::{compose_location, parse_location};

/// Composes the stored location string from structured fields.
///
/// # Endpoint
///
/// `POST /api/locations/compose`
///
/// Called on every keystroke for the live "final location" preview, so it
/// never fails.
///
/// # Request Body
///
/// ```json
/// { "city": "Kathmandu", "zip": "44600", "extra": "Nayabazar, Sorakhutte" }
/// ```
///
/// # Response
///
/// ```json
/// { "location": "Kathmandu 44600 — Nayabazar, Sorakhutte" }
/// ```
pub async fn compose_handler(Json(payload): Json<ComposeRequest>) -> Json<ComposeResponse> {
    Json(ComposeResponse {
        location: compose_location(&payload.city, &payload.zip, &payload.extra),
    })
}

/// Parses a stored location string into structured fields.
///
/// # Endpoint
///
/// `POST /api/locations/parse`
///
/// # Response
///
/// ```json
/// {
///   "city": "Kathmandu",
///   "zip": "44600",
///   "extra": "Nayabazar, Sorakhutte",
///   "display_line": "Kathmandu, 44600, Nayabazar, Sorakhutte",
///   "city_badge": "Kathmandu"
/// }
/// ```
pub async fn parse_handler(Json(payload): Json<ParseRequest>) -> Json<ParseResponse> {
    Json(parse_location(payload.location.as_deref()).into())
}
