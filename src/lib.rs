// lib.rs - Root module for the expo_brands library
//
// The web application lives under `web_app`; `fixtures` holds the sample
// brands and exhibitors shared by the test suites.

/// Reusable sample data for tests
pub mod fixtures;

/// The Leptos brand management application
pub mod web_app;

/// WASM entry point: hydrates the server-rendered page in the browser
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
