//! Product category entity for the local fallback store.

use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Categories shown before anything has been stored.
    pub fn defaults() -> Vec<Category> {
        vec![
            Category::new(1, "Skincare", "Herbal creams, facewash, wellness"),
            Category::new(2, "Hair Care", "Shampoos, oils, conditioners"),
            Category::new(3, "Wellness", "Teas, supplements, daily health"),
        ]
    }
}

/// Input data for creating a category. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}
