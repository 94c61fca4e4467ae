//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryCategoryRepository`] - Process-local category fallback store

pub mod memory_category_repository;

pub use memory_category_repository::InMemoryCategoryRepository;
