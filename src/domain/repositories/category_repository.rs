//! Repository trait for the category fallback store.

use crate::domain::entities::{Category, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capability for product categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryCategoryRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Lists all categories in insertion order.
    async fn list(&self) -> Result<Vec<Category>, AppError>;

    /// Stores a new category and returns it with its assigned id.
    async fn add(&self, new_category: NewCategory) -> Result<Category, AppError>;

    /// Replaces the category with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no category has that id.
    async fn update(&self, category: Category) -> Result<Category, AppError>;

    /// Removes a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no category has that id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
