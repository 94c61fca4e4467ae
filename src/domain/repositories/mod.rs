//! Repository trait definitions for the domain layer.
//!
//! Traits define storage contracts; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.

pub mod category_repository;

pub use category_repository::CategoryRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
