//! API route configuration.

use crate::api::handlers::{
    category_list_handler, compose_handler, create_category_handler, delete_category_handler,
    directory_handler, edit_form_handler, parse_handler, submission_handler,
    update_category_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /locations/compose`        - Compose a stored location string
/// - `POST   /locations/parse`          - Parse a stored location string
/// - `POST   /distributors/submission`  - Validate a form, build the Backend API request
/// - `POST   /distributors/edit-form`   - Pre-fill an edit form from a stored record
/// - `POST   /distributors/directory`   - Search records and render listing cards
/// - `GET    /categories`               - List categories
/// - `POST   /categories`               - Create a category
/// - `PUT    /categories/{id}`          - Update a category
/// - `DELETE /categories/{id}`          - Delete a category
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/locations/compose", post(compose_handler))
        .route("/locations/parse", post(parse_handler))
        .route("/distributors/submission", post(submission_handler))
        .route("/distributors/edit-form", post(edit_form_handler))
        .route("/distributors/directory", post(directory_handler))
        .route(
            "/categories",
            get(category_list_handler).post(create_category_handler),
        )
        .route(
            "/categories/{id}",
            put(update_category_handler).delete(delete_category_handler),
        )
}
