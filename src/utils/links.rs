//! Outbound contact links shown on distributor listing cards.

use url::Url;

const MAPS_BASE: &str = "https://maps.google.com/";
const GMAIL_COMPOSE_BASE: &str = "https://mail.google.com/mail/?view=cm&fs=1";

/// Google Maps search link for a raw stored location string.
///
/// Returns `None` for blank input.
pub fn maps_href(location: &str) -> Option<String> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }

    Url::parse_with_params(MAPS_BASE, &[("q", location)])
        .ok()
        .map(String::from)
}

/// Gmail compose link prefilled with recipient, subject and body.
///
/// Blank subject or body are left out of the query. Returns `None` when
/// there is no recipient.
pub fn gmail_compose_href(to: &str, subject: &str, body: &str) -> Option<String> {
    let to = to.trim();
    if to.is_empty() {
        return None;
    }

    let mut url = Url::parse(GMAIL_COMPOSE_BASE).ok()?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("to", to);
        if !subject.is_empty() {
            query.append_pair("su", subject);
        }
        if !body.is_empty() {
            query.append_pair("body", body);
        }
    }

    Some(url.into())
}

/// `tel:` link with all whitespace removed from the number.
pub fn tel_href(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(format!("tel:{digits}"))
    }
}
