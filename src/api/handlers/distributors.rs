//! Handlers for distributor form and listing endpoints.

use axum::{Json, extract::State};

use crate::api::dto::distributor::{DirectoryRequest, DirectoryResponse};
use crate::domain::entities::{DistributorForm, DistributorRecord, Submission};
use crate::error::AppError;
use crate::state::AppState;

/// Validates a distributor form and returns the Backend API request to send.
///
/// # Endpoint
///
/// `POST /api/distributors/submission`
///
/// # Response
///
/// ```json
/// {
///   "method": "POST",
///   "path": "/api/distributors/12",
///   "payload": {
///     "_method": "PUT",
///     "name": "Himal Herbs",
///     "location": "Kathmandu 44600 — Nayabazar, Sorakhutte",
///     "phone": "9841234567",
///     "email": "himal@example.com"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 with `details.fields` (first message per field) and
/// `details.location_preview`.
pub async fn submission_handler(
    State(state): State<AppState>,
    Json(form): Json<DistributorForm>,
) -> Result<Json<Submission>, AppError> {
    let submission = state.distributor_service.prepare_submission(&form)?;
    Ok(Json(submission))
}

/// Pre-fills the edit form from a stored record.
///
/// # Endpoint
///
/// `POST /api/distributors/edit-form`
pub async fn edit_form_handler(
    State(state): State<AppState>,
    Json(record): Json<DistributorRecord>,
) -> Json<DistributorForm> {
    Json(state.distributor_service.edit_form(&record))
}

/// Renders stored records as searchable public listing cards.
///
/// # Endpoint
///
/// `POST /api/distributors/directory`
pub async fn directory_handler(
    State(state): State<AppState>,
    Json(payload): Json<DirectoryRequest>,
) -> Json<DirectoryResponse> {
    let items = state
        .distributor_service
        .directory(&payload.distributors, payload.query.as_deref());

    Json(DirectoryResponse {
        total: payload.distributors.len(),
        matched: items.len(),
        items,
    })
}
