// web_app/server_fns.rs - Leptos server function declarations
//
// These are accessible from both client (WASM) and server (native Rust). The
// #[server] macro generates:
// - On server: The actual function, which forwards to the brands API
// - On client: A stub that makes HTTP POST requests to the server
//
// `ServerFnApi` wraps the client stubs in the `BrandApi` trait so the page
// controller does not care which side of the wire it runs on.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::web_app::api::BrandApi;
use crate::web_app::error::BrandApiError;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
fn api_client() -> Result<crate::web_app::api::ApiClient, ServerFnError> {
    use crate::web_app::api::{shared, ApiClient};

    // Provided per request by the server
    if let Some(client) = use_context::<ApiClient>() {
        return Ok(client);
    }

    if let Some(client) = shared::get_client() {
        return Ok(client);
    }

    tracing::error!("No brands API client registered");
    Err(ServerFnError::new("Brands API client not available"))
}

/// The user-facing message travels as the server error text.
#[cfg(feature = "ssr")]
fn relay(err: BrandApiError) -> ServerFnError {
    tracing::warn!(error = %err, "brands API call failed");
    ServerFnError::ServerError(err.to_string())
}

/// List all brands
#[server(ListBrands, "/api")]
pub async fn list_brands() -> Result<Vec<Brand>, ServerFnError> {
    let client = api_client()?;
    client.list_brands().await.map_err(relay)
}

/// Create a brand
#[server(AddBrand, "/api")]
pub async fn add_brand(brand: NewBrand) -> Result<(), ServerFnError> {
    tracing::info!("Add brand request: {}", brand.brand_name);
    let client = api_client()?;
    client.create_brand(&brand).await.map_err(relay)
}

/// Create an exhibitor
#[server(AddExhibitor, "/api")]
pub async fn add_exhibitor(exhibitor: NewExhibitor) -> Result<(), ServerFnError> {
    tracing::info!("Add exhibitor request: {}", exhibitor.company);
    let client = api_client()?;
    client.create_exhibitor(&exhibitor).await.map_err(relay)
}

/// Update an existing brand
#[server(EditBrand, "/api")]
pub async fn edit_brand(edit: BrandEdit) -> Result<(), ServerFnError> {
    tracing::info!("Edit brand request: {}", edit.brand_id);
    let client = api_client()?;
    client.update_brand(&edit).await.map_err(relay)
}

/// `BrandApi` over the server functions above
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnApi;

impl BrandApi for ServerFnApi {
    async fn list_brands(&self) -> Result<Vec<Brand>, BrandApiError> {
        list_brands().await.map_err(from_server_fn)
    }

    async fn create_brand(&self, brand: &NewBrand) -> Result<(), BrandApiError> {
        add_brand(brand.clone()).await.map_err(from_server_fn)
    }

    async fn create_exhibitor(&self, exhibitor: &NewExhibitor) -> Result<(), BrandApiError> {
        add_exhibitor(exhibitor.clone()).await.map_err(from_server_fn)
    }

    async fn update_brand(&self, edit: &BrandEdit) -> Result<(), BrandApiError> {
        edit_brand(edit.clone()).await.map_err(from_server_fn)
    }
}

/// Server-side failures keep their message; anything else is transport.
pub fn from_server_fn(err: ServerFnError) -> BrandApiError {
    match err {
        ServerFnError::ServerError(message) => BrandApiError::Server(message),
        other => BrandApiError::Network(other.to_string()),
    }
}
