//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{CategoryService, DistributorService};
use crate::config::Config;
use crate::domain::entities::Category;
use crate::infrastructure::persistence::InMemoryCategoryRepository;

#[derive(Clone)]
pub struct AppState {
    pub distributor_service: Arc<DistributorService>,
    pub category_service: Arc<CategoryService<InMemoryCategoryRepository>>,
}

impl AppState {
    pub fn new(
        distributor_service: Arc<DistributorService>,
        category_service: Arc<CategoryService<InMemoryCategoryRepository>>,
    ) -> Self {
        Self {
            distributor_service,
            category_service,
        }
    }

    /// Wires services from configuration.
    pub fn from_config(config: &Config) -> Self {
        let categories = if config.seed_categories {
            Category::defaults()
        } else {
            Vec::new()
        };
        let repository = Arc::new(InMemoryCategoryRepository::with_categories(categories));

        Self::new(
            Arc::new(DistributorService::new(config.inquiry_subject.clone())),
            Arc::new(CategoryService::new(repository)),
        )
    }
}
