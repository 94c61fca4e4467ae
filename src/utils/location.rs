//! Distributor location composition and parsing.
//!
//! The Backend API stores a distributor address as one free-text `location`
//! column. Admin forms edit it through three structured fields and this
//! module converts between the two shapes:
//!
//! ```text
//! {city}[ {zip}][ — {extra}]
//! Kathmandu 44600 — Nayabazar, Sorakhutte
//! ```
//!
//! [`compose_location`] is deterministic. [`parse_location`] is a best-effort
//! heuristic used to pre-fill edit forms from stored (possibly legacy,
//! comma-separated) data. Neither function can fail: malformed input is
//! absorbed into the `city`/`extra` fields, never rejected.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Separator between the `"city zip"` part and the extra details.
pub const EM_DASH: char = '\u{2014}';

/// Lazy city, optional trailing separators, optional trailing 5-digit ZIP.
static CITY_ZIP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)[,\s-]*([0-9]{5})?$").unwrap());

/// Structured view of a stored location string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationParts {
    pub city: String,
    pub zip: String,
    /// Street, area or landmark. May itself contain commas or hyphens.
    pub extra: String,
}

impl LocationParts {
    pub fn new(city: impl Into<String>, zip: impl Into<String>, extra: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            zip: zip.into(),
            extra: extra.into(),
        }
    }

    /// Re-composes the stored string from the current fields.
    pub fn compose(&self) -> String {
        compose_location(&self.city, &self.zip, &self.extra)
    }

    /// Human display line for listings: `"City, ZIP, Extra"`, empty parts skipped.
    pub fn display_line(&self) -> String {
        [&self.city, &self.zip, &self.extra]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Short badge text: the city, or the first comma segment of `extra`.
    pub fn city_badge(&self) -> String {
        if !self.city.is_empty() {
            return self.city.clone();
        }

        self.extra
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.zip.is_empty() && self.extra.is_empty()
    }
}

impl fmt::Display for LocationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compose())
    }
}

/// Builds the single location string stored by the Backend API.
///
/// All inputs are trimmed. `zip` is concatenated as given; checking its
/// shape is the caller's job (see
/// [`crate::domain::entities::DistributorForm`]).
///
/// # Examples
///
/// ```
/// use distributor_locations::utils::location::compose_location;
///
/// assert_eq!(
///     compose_location("Kathmandu", "44600", "Nayabazar, Sorakhutte"),
///     "Kathmandu 44600 — Nayabazar, Sorakhutte"
/// );
/// assert_eq!(compose_location("", "", ""), "");
/// ```
pub fn compose_location(city: &str, zip: &str, extra: &str) -> String {
    let (city, zip, extra) = (city.trim(), zip.trim(), extra.trim());

    let left = match (city.is_empty(), zip.is_empty()) {
        (false, false) => format!("{city} {zip}"),
        (false, true) => city.to_string(),
        (true, _) => zip.to_string(),
    };

    match (left.is_empty(), extra.is_empty()) {
        (_, true) => left,
        (true, false) => extra.to_string(),
        (false, false) => format!("{left} {EM_DASH} {extra}"),
    }
}

/// Recovers `city`, `zip` and `extra` from a stored location string.
///
/// # Algorithm
///
/// 1. Split on the first em dash: the left side holds city and ZIP, the
///    rest (further em dashes included) is `extra`.
/// 2. Peel an optional trailing 5-digit ZIP and its separators off the
///    left side.
/// 3. Legacy records without an em dash fall back to a comma split:
///    `"City, Area, Landmark"` gives city `"City"`, extra `"Area, Landmark"`.
///
/// The result is a pre-fill suggestion, not a verified inverse of
/// [`compose_location`].
///
/// # Examples
///
/// ```
/// use distributor_locations::utils::location::{LocationParts, parse_location};
///
/// assert_eq!(
///     parse_location(Some("Kathmandu 44600 — Nayabazar, Sorakhutte")),
///     LocationParts::new("Kathmandu", "44600", "Nayabazar, Sorakhutte")
/// );
/// assert_eq!(parse_location(None), LocationParts::default());
/// ```
pub fn parse_location(location: Option<&str>) -> LocationParts {
    let text = location.unwrap_or_default().trim();
    if text.is_empty() {
        return LocationParts::default();
    }

    let (left, extra_from_dash, has_dash) = match text.split_once(EM_DASH) {
        Some((left, rest)) => (left.trim(), rest.trim(), true),
        None => (text, "", false),
    };

    let (city, zip) = split_trailing_zip(left);

    if !has_dash && let Some((head, tail)) = city.split_once(',') {
        return LocationParts::new(head.trim(), zip, tail.trim());
    }

    LocationParts::new(city.trim(), zip, extra_from_dash)
}

/// Splits `"City 44600"` into `("City", "44600")`.
///
/// Without a trailing ZIP the whole input (minus trailing separators) is the
/// city.
fn split_trailing_zip(left: &str) -> (&str, &str) {
    let Some(caps) = CITY_ZIP_REGEX.captures(left) else {
        return (left, "");
    };

    let city = caps.get(1).map_or("", |m| m.as_str()).trim();
    let city = city
        .strip_suffix(|c: char| c == ',' || c == '-')
        .unwrap_or(city)
        .trim();
    let zip = caps.get(2).map_or("", |m| m.as_str());

    (city, zip)
}
