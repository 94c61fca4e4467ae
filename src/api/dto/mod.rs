//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Distributor forms and submissions are serialized
//! straight from [`crate::domain::entities`].

pub mod category;
pub mod distributor;
pub mod health;
pub mod location;
