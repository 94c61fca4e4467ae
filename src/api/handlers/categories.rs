//! Handlers for category management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::category::{CategoryListResponse, CategoryRequest, CategoryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all categories.
///
/// # Endpoint
///
/// `GET /api/categories`
pub async fn category_list_handler(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = state.category_service.list_categories().await?;
    Ok(Json(CategoryListResponse { categories }))
}

/// Creates a category.
///
/// # Endpoint
///
/// `POST /api/categories`
///
/// # Errors
///
/// Returns 400 if the name is blank or too long.
pub async fn create_category_handler(
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    payload.validate()?;

    let category = state
        .category_service
        .create_category(&payload.name, payload.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse { category })))
}

/// Updates a category.
///
/// # Endpoint
///
/// `PUT /api/categories/{id}`
///
/// # Errors
///
/// Returns 400 on invalid input, 404 if the category does not exist.
pub async fn update_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    payload.validate()?;

    let category = state
        .category_service
        .update_category(id, &payload.name, payload.description.as_deref())
        .await?;

    Ok(Json(CategoryResponse { category }))
}

/// Deletes a category.
///
/// # Endpoint
///
/// `DELETE /api/categories/{id}`
///
/// # Errors
///
/// Returns 404 if the category does not exist.
pub async fn delete_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.category_service.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
