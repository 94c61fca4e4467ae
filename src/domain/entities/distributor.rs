//! Distributor records, edit forms and listing cards.
//!
//! Distributors are owned by the Backend API. This crate only sees them as
//! JSON records and shapes them into forms, request payloads and cards.

use crate::utils::location::compose_location;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{Validate, ValidationError, ValidationErrors};

static ZIP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5}$").unwrap());

/// 10-digit Nepali mobile number starting with 98 or 97.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(98|97)[0-9]{8}$").unwrap());

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

/// A distributor as returned by the Backend API.
///
/// Every text field may be missing or `null` in older records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributorRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Structured edit form for a distributor.
///
/// `city`, `zip` and `extra` are composed into the single stored
/// `location` string on submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DistributorForm {
    /// Present when editing an existing record.
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(custom(function = "validate_zip"))]
    pub zip: String,

    pub extra: String,
}

impl DistributorForm {
    /// Returns a copy with every text field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            city: self.city.trim().to_string(),
            zip: self.zip.trim().to_string(),
            extra: self.extra.trim().to_string(),
        }
    }

    /// The location string that would be saved with the current fields.
    pub fn location_preview(&self) -> String {
        compose_location(&self.city, &self.zip, &self.extra)
    }

    /// Field rules plus the composed-location requirement.
    ///
    /// Every failing field is reported, not just the first one.
    pub fn validate_submission(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.location_preview().is_empty() {
            errors.add(
                "location",
                ValidationError::new("location_required")
                    .with_message(Cow::Borrowed("Location is required (City is mandatory)")),
            );
        }

        if errors.field_errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_zip(zip: &str) -> Result<(), ValidationError> {
    if zip.is_empty() || ZIP_REGEX.is_match(zip) {
        return Ok(());
    }
    Err(ValidationError::new("zip_format").with_message(Cow::Borrowed("ZIP should be 5 digits")))
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        return Ok(());
    }
    Err(ValidationError::new("phone_format").with_message(Cow::Borrowed(
        "Phone must be a 10-digit Nepali mobile starting with 98 or 97",
    )))
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(
            ValidationError::new("email_required").with_message(Cow::Borrowed("Email is required"))
        );
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new("email_format").with_message(Cow::Borrowed("Invalid email")));
    }
    Ok(())
}

/// Request body sent to the Backend API on create or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributorPayload {
    /// Method override; the Backend API accepts updates as `POST` + `_method=PUT`.
    #[serde(rename = "_method", skip_serializing_if = "Option::is_none", default)]
    pub method: Option<String>,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
}

/// A ready-to-send Backend API request built from a validated form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub method: &'static str,
    pub path: String,
    pub payload: DistributorPayload,
}

/// Public listing card for one distributor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributorCard {
    pub id: Option<i64>,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    /// `"City, ZIP, Extra"` shown under the name.
    pub display_line: String,
    /// City-only badge.
    pub city_badge: String,
    pub maps_href: Option<String>,
    pub phone_href: Option<String>,
    pub email_href: Option<String>,
}
