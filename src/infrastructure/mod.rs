//! Infrastructure layer implementing the domain repository traits.
//!
//! # Modules
//!
//! - [`persistence`] - Storage implementations

pub mod persistence;
