// common/mod.rs - Shared helpers for the mock-server test suites
//
// Every suite starts its own wiremock server, so tests never share state
// and can run in any order.

#![allow(dead_code)]

use expo_brands::fixtures::{BrandsFixture, JsonFixture};
use expo_brands::web_app::api::ApiClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at the mock server
pub fn test_client(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(&server.uri()).expect("client construction should not fail")
}

/// Serve `body` from `GET /api/brands`
pub async fn mount_brand_list(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve the three sample brands from `GET /api/brands`
pub async fn mount_sample_brands(server: &MockServer) {
    mount_brand_list(server, BrandsFixture::json()).await;
}

/// Answer `POST <route>` with an empty body and `status`
pub async fn mount_post(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// "METHOD /path" for every request the server saw, in arrival order
pub async fn request_log(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| format!("{} {}", request.method, request.url.path()))
        .collect()
}
