//! Business logic services for the application layer.

pub mod category_service;
pub mod distributor_service;

pub use category_service::CategoryService;
pub use distributor_service::DistributorService;
