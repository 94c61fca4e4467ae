//! Domain layer: entities and repository contracts.
//!
//! - [`entities`] - Distributor forms/records/cards and categories
//! - [`repositories`] - Storage traits implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP or storage details.

pub mod entities;
pub mod repositories;
