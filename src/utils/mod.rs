//! Pure helper functions shared by services, handlers and the CLI.
//!
//! - [`location`] - Location string composition and best-effort parsing
//! - [`links`] - Maps, Gmail compose and `tel:` links for listing cards

pub mod links;
pub mod location;

pub use location::{LocationParts, compose_location, parse_location};
