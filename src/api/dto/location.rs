//! DTOs for the location compose/parse endpoints.

use serde::{Deserialize, Serialize};

use crate::utils::location::LocationParts;

/// Structured location fields. Missing fields are treated as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ComposeRequest {
    pub city: String,
    pub zip: String,
    pub extra: String,
}

#[derive(Debug, Serialize)]
pub struct ComposeResponse {
    pub location: String,
}

/// Stored location string; `null` or missing is treated as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParseRequest {
    pub location: Option<String>,
}

/// Parsed fields plus the listing helpers derived from them.
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub city: String,
    pub zip: String,
    pub extra: String,
    pub display_line: String,
    pub city_badge: String,
}

impl From<LocationParts> for ParseResponse {
    fn from(parts: LocationParts) -> Self {
        Self {
            display_line: parts.display_line(),
            city_badge: parts.city_badge(),
            city: parts.city,
            zip: parts.zip,
            extra: parts.extra,
        }
    }
}
