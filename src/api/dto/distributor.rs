//! DTOs for distributor form and listing endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DistributorCard, DistributorRecord};

/// Records fetched from the Backend API plus an optional search query.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DirectoryRequest {
    pub query: Option<String>,
    pub distributors: Vec<DistributorRecord>,
}

#[derive(Debug, Serialize)]
pub struct DirectoryResponse {
    /// Number of records received.
    pub total: usize,
    /// Number of records matching the query.
    pub matched: usize,
    pub items: Vec<DistributorCard>,
}
