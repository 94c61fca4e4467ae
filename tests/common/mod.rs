#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use distributor_locations::api::handlers::health_handler;
use distributor_locations::api::routes::api_routes;
use distributor_locations::config::Config;
use distributor_locations::state::AppState;
use serde_json::{Value, json};

pub const INQUIRY_SUBJECT: &str = "Distributor inquiry";

pub fn create_test_state(seed_categories: bool) -> AppState {
    let config = Config {
        seed_categories,
        inquiry_subject: INQUIRY_SUBJECT.to_string(),
        ..Config::default()
    };
    AppState::from_config(&config)
}

pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn valid_form() -> Value {
    json!({
        "name": "Himal Herbs Traders",
        "phone": "9841234567",
        "email": "himal@example.com",
        "city": "Kathmandu",
        "zip": "44600",
        "extra": "Nayabazar, Sorakhutte"
    })
}
