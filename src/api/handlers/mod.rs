//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod categories;
pub mod distributors;
pub mod health;
pub mod location;

pub use categories::{
    category_list_handler, create_category_handler, delete_category_handler,
    update_category_handler,
};
pub use distributors::{directory_handler, edit_form_handler, submission_handler};
pub use health::health_handler;
pub use location::{compose_handler, parse_handler};
