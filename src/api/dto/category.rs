//! DTOs for category management.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Category;

/// Create or update request for a category.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: Category,
}
