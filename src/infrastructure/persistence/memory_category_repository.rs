//! In-memory implementation of the category repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

/// Process-local category store.
///
/// Used when the Backend API category endpoints are unavailable. Contents
/// live as long as the process. New ids are Unix-millisecond timestamps,
/// bumped past the current maximum so they stay unique and increasing.
pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_categories(Vec::new())
    }

    /// Creates a store pre-filled with `categories`.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: RwLock::new(categories),
        }
    }

    /// Creates a store pre-filled with [`Category::defaults`].
    pub fn seeded() -> Self {
        Self::with_categories(Category::defaults())
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id(categories: &[Category]) -> i64 {
    let now = Utc::now().timestamp_millis();
    let max = categories.iter().map(|c| c.id).max().unwrap_or(0);
    now.max(max + 1)
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.categories.read().await.clone())
    }

    async fn add(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let mut categories = self.categories.write().await;

        let category = Category {
            id: next_id(&categories),
            name: new_category.name,
            description: new_category.description,
        };
        categories.push(category.clone());
        debug!(id = category.id, "Category stored");

        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category, AppError> {
        let mut categories = self.categories.write().await;

        let slot = categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| AppError::not_found("Category not found", json!({"id": category.id})))?;
        *slot = category.clone();

        Ok(category)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut categories = self.categories.write().await;

        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(AppError::not_found("Category not found", json!({"id": id})));
        }

        Ok(())
    }
}
