// web_app/api/shared.rs - Process-wide brands API client
//
// The server registers one client at startup; server functions pick it up
// from here when it is not provided through the Leptos context.

use std::sync::{Mutex, OnceLock};

use super::ApiClient;

static CLIENT: OnceLock<ApiClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<ApiClient>> = Mutex::new(None);

/// Initialize the global API client
pub fn init_client(client: ApiClient) {
    tracing::info!(base_url = %client.base_url(), "Initializing global brands API client");
    if CLIENT.set(client).is_err() {
        tracing::warn!("Brands API client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: ApiClient) {
    match TEST_CLIENT_OVERRIDE.lock() {
        Ok(mut guard) => *guard = Some(client),
        Err(poisoned) => *poisoned.into_inner() = Some(client),
    }
}

/// Get the global API client, preferring a test override
pub fn get_client() -> Option<ApiClient> {
    let overridden = match TEST_CLIENT_OVERRIDE.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    if overridden.is_some() {
        return overridden;
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Global brands API client is empty!");
    }
    client
}
