//! Core entities of the distributor and catalog back-office.
//!
//! - [`DistributorRecord`] - A distributor as stored by the Backend API
//! - [`DistributorForm`] - Structured edit form with validation rules
//! - [`DistributorPayload`] / [`Submission`] - Outgoing create/update request
//! - [`DistributorCard`] - Public listing card
//! - [`Category`] - Product category held by the fallback store

pub mod category;
pub mod distributor;

pub use category::{Category, NewCategory};
pub use distributor::{
    DistributorCard, DistributorForm, DistributorPayload, DistributorRecord, Submission,
};
