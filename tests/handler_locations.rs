mod common;

use serde_json::{Value, json};

// ─── COMPOSE ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_compose_full() {
    let server = common::make_server(common::create_test_state(true));

    let response = server
        .post("/api/locations/compose")
        .json(&json!({
            "city": "Kathmandu",
            "zip": "44600",
            "extra": "Nayabazar, Sorakhutte"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["location"], "Kathmandu 44600 — Nayabazar, Sorakhutte");
}

#[tokio::test]
async fn test_compose_missing_fields_default_to_empty() {
    let server = common::make_server(common::create_test_state(true));

    let response = server
        .post("/api/locations/compose")
        .json(&json!({ "city": " Pokhara " }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["location"], "Pokhara");
}

#[tokio::test]
async fn test_compose_empty_body() {
    let server = common::make_server(common::create_test_state(true));

    let response = server.post("/api/locations/compose").json(&json!({})).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["location"], "");
}

#[tokio::test]
async fn test_compose_keeps_unvalidated_zip() {
    let server = common::make_server(common::create_test_state(true));

    let response = server
        .post("/api/locations/compose")
        .json(&json!({ "city": "Kathmandu", "zip": "abc" }))
        .await;

    assert_eq!(response.json::<Value>()["location"], "Kathmandu abc");
}

// ─── PARSE ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_parse_full() {
    let server = common::make_server(common::create_test_state(true));

    let response = server
        .post("/api/locations/parse")
        .json(&json!({ "location": "Kathmandu 44600 — Nayabazar, Sorakhutte" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["city"], "Kathmandu");
    assert_eq!(body["zip"], "44600");
    assert_eq!(body["extra"], "Nayabazar, Sorakhutte");
    assert_eq!(body["display_line"], "Kathmandu, 44600, Nayabazar, Sorakhutte");
    assert_eq!(body["city_badge"], "Kathmandu");
}

#[tokio::test]
async fn test_parse_legacy_comma_format() {
    let server = common::make_server(common::create_test_state(true));

    let response = server
        .post("/api/locations/parse")
        .json(&json!({ "location": "Kathmandu, Nayabazar, Sorakhutte" }))
        .await;

    let body = response.json::<Value>();
    assert_eq!(body["city"], "Kathmandu");
    assert_eq!(body["zip"], "");
    assert_eq!(body["extra"], "Nayabazar, Sorakhutte");
}

#[tokio::test]
async fn test_parse_null_location() {
    let server = common::make_server(common::create_test_state(true));

    for body in [json!({ "location": null }), json!({})] {
        let response = server.post("/api/locations/parse").json(&body).await;

        response.assert_status_ok();
        let parsed = response.json::<Value>();
        assert_eq!(parsed["city"], "");
        assert_eq!(parsed["zip"], "");
        assert_eq!(parsed["extra"], "");
        assert_eq!(parsed["display_line"], "");
    }
}

#[tokio::test]
async fn test_compose_then_parse_round_trip() {
    let server = common::make_server(common::create_test_state(true));

    let composed = server
        .post("/api/locations/compose")
        .json(&json!({ "city": "Bhaktapur", "zip": "44800", "extra": "Taumadhi - east" }))
        .await
        .json::<Value>();

    let parsed = server
        .post("/api/locations/parse")
        .json(&json!({ "location": composed["location"] }))
        .await
        .json::<Value>();

    assert_eq!(parsed["city"], "Bhaktapur");
    assert_eq!(parsed["zip"], "44800");
    assert_eq!(parsed["extra"], "Taumadhi - east");
}
