//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the pure helpers in
//! [`crate::utils`], and provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::distributor_service::DistributorService`] - Form submission, edit pre-fill and listing cards
//! - [`services::category_service::CategoryService`] - Category fallback store management

pub mod services;
