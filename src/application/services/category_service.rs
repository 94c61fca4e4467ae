//! Category management service.

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for the category fallback store.
///
/// Trims input and rejects blank names before anything reaches the
/// repository.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Creates a new category service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.repository.list().await
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    pub async fn create_category(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Category, AppError> {
        let name = validate_name(name)?;

        let created = self
            .repository
            .add(NewCategory {
                name,
                description: description.unwrap_or_default().trim().to_string(),
            })
            .await?;

        tracing::info!(id = created.id, name = %created.name, "Category created");
        Ok(created)
    }

    /// Replaces name and description of an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::NotFound`] if the category does not exist.
    pub async fn update_category(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<Category, AppError> {
        let name = validate_name(name)?;

        self.repository
            .update(Category {
                id,
                name,
                description: description.unwrap_or_default().trim().to_string(),
            })
            .await
    }

    /// Deletes a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    pub async fn delete_category(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(id, "Category deleted");
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request(
            "Validation failed",
            json!({"fields": {"name": "Name is required"}}),
        ));
    }
    Ok(name.to_string())
}
