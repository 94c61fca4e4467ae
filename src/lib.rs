//! # Distributor Locations
//!
//! Location codec and form companion service for a herbal products
//! storefront whose Backend API stores each distributor address as a single
//! free-text `location` column.
//!
//! ## Architecture
//!
//! - **Utilities** ([`utils`]) - The location codec and contact link builders
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Form, listing and category services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory category store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Location format
//!
//! ```text
//! {city}[ {zip}][ — {extra}]
//! ```
//!
//! [`utils::location::compose_location`] builds it from form fields;
//! [`utils::location::parse_location`] recovers the fields best-effort,
//! including from legacy comma-separated records.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service
//! cargo run
//!
//! # Compose and parse from the command line
//! cargo run --bin location -- compose --city Kathmandu --zip 44600 --extra "Nayabazar, Sorakhutte"
//! cargo run --bin location -- parse "Kathmandu, Nayabazar, Sorakhutte"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CategoryService, DistributorService};
    pub use crate::domain::entities::{
        Category, DistributorCard, DistributorForm, DistributorRecord, Submission,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::location::{LocationParts, compose_location, parse_location};
}
