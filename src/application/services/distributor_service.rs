//! Distributor form and listing workflow.
//!
//! Distributors are persisted by the Backend API. This service prepares the
//! requests sent to it and reshapes the records it returns:
//!
//! - form fields → validated [`Submission`] with a composed `location`
//! - stored record → pre-filled [`DistributorForm`] via best-effort parsing
//! - stored records → searchable public [`DistributorCard`] listing

use serde_json::json;

use crate::domain::entities::{
    DistributorCard, DistributorForm, DistributorPayload, DistributorRecord, Submission,
};
use crate::error::{AppError, field_messages};
use crate::utils::links::{gmail_compose_href, maps_href, tel_href};
use crate::utils::location::parse_location;

/// Collection path on the Backend API.
pub const DISTRIBUTORS_PATH: &str = "/api/distributors";

pub struct DistributorService {
    inquiry_subject: String,
}

impl DistributorService {
    /// Creates a service using `inquiry_subject` for Gmail compose links.
    pub fn new(inquiry_subject: impl Into<String>) -> Self {
        Self {
            inquiry_subject: inquiry_subject.into(),
        }
    }

    /// Validates a form and builds the Backend API request for it.
    ///
    /// Creates go to `POST /api/distributors`; updates go to
    /// `POST /api/distributors/{id}` with `_method = "PUT"`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with every failing field and the
    /// composed `location_preview`, so callers keep showing the preview next
    /// to the fields being corrected.
    pub fn prepare_submission(&self, form: &DistributorForm) -> Result<Submission, AppError> {
        let form = form.trimmed();
        let location = form.location_preview();

        if let Err(errors) = form.validate_submission() {
            let fields = field_messages(&errors);
            tracing::debug!(fields = ?fields.keys().collect::<Vec<_>>(), "Distributor form rejected");
            return Err(AppError::bad_request(
                "Validation failed",
                json!({ "fields": fields, "location_preview": location }),
            ));
        }

        let (path, method) = match form.id {
            Some(id) => (format!("{DISTRIBUTORS_PATH}/{id}"), Some("PUT".to_string())),
            None => (DISTRIBUTORS_PATH.to_string(), None),
        };

        tracing::info!(path = %path, location = %location, "Distributor submission prepared");

        Ok(Submission {
            method: "POST",
            path,
            payload: DistributorPayload {
                method,
                name: form.name,
                location,
                phone: form.phone,
                email: form.email,
            },
        })
    }

    /// Pre-fills an edit form from a stored record.
    pub fn edit_form(&self, record: &DistributorRecord) -> DistributorForm {
        let parts = parse_location(record.location.as_deref());

        DistributorForm {
            id: record.id,
            name: record.name.clone().unwrap_or_default(),
            phone: record.phone.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            city: parts.city,
            zip: parts.zip,
            extra: parts.extra,
        }
    }

    /// Builds the public listing card for a record.
    pub fn card(&self, record: &DistributorRecord) -> DistributorCard {
        let name = record.name.clone().unwrap_or_default();
        let location = record.location.clone().unwrap_or_default();
        let phone = record.phone.clone().unwrap_or_default();
        let email = record.email.clone().unwrap_or_default();
        let parts = parse_location(Some(&location));

        let body = format!(
            "Hello {name},\n\nI would like to inquire about your distribution services.\n\nThanks!"
        );

        DistributorCard {
            id: record.id,
            display_line: parts.display_line(),
            city_badge: parts.city_badge(),
            maps_href: maps_href(&location),
            phone_href: tel_href(&phone),
            email_href: gmail_compose_href(&email, &self.inquiry_subject, &body),
            name,
            location,
            phone,
            email,
        }
    }

    /// Filters records by `query` and renders them as cards.
    ///
    /// Matching is a case-insensitive substring search over name, location,
    /// phone and email. A blank query keeps every record. Order is preserved.
    pub fn directory(
        &self,
        records: &[DistributorRecord],
        query: Option<&str>,
    ) -> Vec<DistributorCard> {
        let query = query.unwrap_or_default().trim().to_lowercase();

        records
            .iter()
            .filter(|record| query.is_empty() || matches_query(record, &query))
            .map(|record| self.card(record))
            .collect()
    }
}

fn matches_query(record: &DistributorRecord, query: &str) -> bool {
    [&record.name, &record.location, &record.phone, &record.email]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> DistributorService {
        DistributorService::new("Distributor inquiry")
    }

    fn form() -> DistributorForm {
        DistributorForm {
            id: None,
            name: " Himal Herbs ".to_string(),
            phone: "9841234567".to_string(),
            email: "himal@example.com".to_string(),
            city: "Kathmandu".to_string(),
            zip: "44600".to_string(),
            extra: "Nayabazar, Sorakhutte".to_string(),
        }
    }

    fn record(id: i64, name: &str, location: Option<&str>) -> DistributorRecord {
        DistributorRecord {
            id: Some(id),
            name: Some(name.to_string()),
            location: location.map(str::to_string),
            phone: Some("9801112222".to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
        }
    }

    #[test]
    fn test_prepare_create_submission() {
        let submission = service().prepare_submission(&form()).unwrap();

        assert_eq!(submission.method, "POST");
        assert_eq!(submission.path, "/api/distributors");
        assert!(submission.payload.method.is_none());
        assert_eq!(submission.payload.name, "Himal Herbs");
        assert_eq!(
            submission.payload.location,
            "Kathmandu 44600 — Nayabazar, Sorakhutte"
        );
    }

    #[test]
    fn test_prepare_update_submission() {
        let form = DistributorForm {
            id: Some(12),
            ..form()
        };

        let submission = service().prepare_submission(&form).unwrap();

        assert_eq!(submission.path, "/api/distributors/12");
        assert_eq!(submission.payload.method.as_deref(), Some("PUT"));
    }

    #[test]
    fn test_prepare_submission_reports_fields_and_preview() {
        let form = DistributorForm {
            zip: "446".to_string(),
            phone: "12345".to_string(),
            ..form()
        };

        let err = service().prepare_submission(&form).unwrap_err();
        let info = err.to_error_info();

        assert_eq!(info.details["fields"]["zip"], "ZIP should be 5 digits");
        assert_eq!(
            info.details["fields"]["phone"],
            "Phone must be a 10-digit Nepali mobile starting with 98 or 97"
        );
        assert!(info.details["fields"].get("name").is_none());
        assert_eq!(
            info.details["location_preview"],
            "Kathmandu 446 — Nayabazar, Sorakhutte"
        );
    }

    #[test]
    fn test_edit_form_parses_location() {
        let record = record(5, "Himal", Some("Kathmandu 44600 — Nayabazar, Sorakhutte"));

        let form = service().edit_form(&record);

        assert_eq!(form.id, Some(5));
        assert_eq!(form.city, "Kathmandu");
        assert_eq!(form.zip, "44600");
        assert_eq!(form.extra, "Nayabazar, Sorakhutte");
    }

    #[test]
    fn test_edit_form_legacy_and_missing_location() {
        let legacy = service().edit_form(&record(1, "A", Some("Pokhara, Lakeside")));
        assert_eq!((legacy.city.as_str(), legacy.extra.as_str()), ("Pokhara", "Lakeside"));

        let missing = service().edit_form(&DistributorRecord::default());
        assert_eq!(missing, DistributorForm::default());
    }

    #[test]
    fn test_edit_then_submit_renormalizes_location() {
        let svc = service();
        let legacy = DistributorRecord {
            location: Some("Pokhara, Lakeside".to_string()),
            ..record(9, "Lake", None)
        };

        let form = svc.edit_form(&legacy);
        let submission = svc.prepare_submission(&form).unwrap();

        assert_eq!(submission.payload.location, "Pokhara — Lakeside");
    }

    #[test]
    fn test_card_fields() {
        let card = service().card(&record(3, "Himal", Some("Kathmandu 44600 — Thamel")));

        assert_eq!(card.display_line, "Kathmandu, 44600, Thamel");
        assert_eq!(card.city_badge, "Kathmandu");
        assert!(card.maps_href.unwrap().starts_with("https://maps.google.com/?q="));
        assert_eq!(card.phone_href.as_deref(), Some("tel:9801112222"));
        assert!(card.email_href.unwrap().contains("su=Distributor+inquiry"));
    }

    #[test]
    fn test_card_without_location() {
        let card = service().card(&record(4, "Nowhere", None));

        assert_eq!(card.location, "");
        assert_eq!(card.display_line, "");
        assert_eq!(card.city_badge, "");
        assert!(card.maps_href.is_none());
    }

    #[test]
    fn test_directory_search() {
        let records = vec![
            record(1, "Himal", Some("Kathmandu 44600 — Thamel")),
            record(2, "Lake", Some("Pokhara — Lakeside")),
            DistributorRecord {
                id: Some(3),
                name: Some("Terai".to_string()),
                ..Default::default()
            },
        ];
        let svc = service();

        assert_eq!(svc.directory(&records, None).len(), 3);
        assert_eq!(svc.directory(&records, Some("   ")).len(), 3);

        let hits = svc.directory(&records, Some(" POKHARA "));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, Some(2));

        let by_email = svc.directory(&records, Some("himal@"));
        assert_eq!(by_email.len(), 1);

        let by_name = svc.directory(&records, Some("terai"));
        assert_eq!(by_name[0].id, Some(3));

        assert!(svc.directory(&records, Some("biratnagar")).is_empty());
    }
}
