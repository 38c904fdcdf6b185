//! HTTP client for the brands REST API.
//!
//! Wraps `reqwest` with the API's envelope and error conventions. Use
//! [`ApiClient::new`] with an [`ApiConfig`] in production or
//! [`ApiClient::with_base_url`] to point at a mock server in tests.

use reqwest::{Client, Response, Url};
use serde::Serialize;

use super::config::ApiConfig;
use super::{paths, BrandApi};
use crate::web_app::error::{
    BrandApiError, ADD_BRAND_FAILED, ADD_EXHIBITOR_FAILED, FETCH_BRANDS_FAILED,
    UPDATE_BRAND_FAILED,
};
use crate::web_app::model::{ApiErrorBody, Brand, BrandEdit, NewBrand, NewExhibitor};

/// Client for the brands REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the base URL in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BrandApiError::Network`] if the underlying `reqwest::Client`
    /// cannot be built or the base URL does not parse.
    pub fn new(config: &ApiConfig) -> Result<Self, BrandApiError> {
        Self::with_base_url(&config.base_url)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::new`].
    pub fn with_base_url(base_url: &str) -> Result<Self, BrandApiError> {
        let client = Client::builder()
            .user_agent(concat!("expo_brands/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Exactly one trailing slash, so joining "api/brands" appends to the
        // base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| {
            BrandApiError::Network(format!("invalid base URL '{base_url}': {e}"))
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, BrandApiError> {
        self.base_url
            .join(path)
            .map_err(|e| BrandApiError::Network(format!("invalid endpoint '{path}': {e}")))
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, BrandApiError> {
        let url = self.endpoint(path)?;
        tracing::info!(%url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        Ok(response)
    }
}

impl BrandApi for ApiClient {
    async fn list_brands(&self) -> Result<Vec<Brand>, BrandApiError> {
        let url = self.endpoint(paths::LIST_BRANDS)?;
        tracing::info!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "brand list request failed");
            return Err(BrandApiError::http(status.as_u16(), FETCH_BRANDS_FAILED));
        }

        let text = response.text().await?;
        let brands = parse_brand_envelope(&text)?;
        tracing::debug!(count = brands.len(), "brand list received");
        Ok(brands)
    }

    async fn create_brand(&self, brand: &NewBrand) -> Result<(), BrandApiError> {
        let response = self.post_json(paths::ADD_BRAND, brand).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), brand = %brand.brand_name, "brand creation failed");
            return Err(BrandApiError::http(status.as_u16(), ADD_BRAND_FAILED));
        }
        tracing::info!(brand = %brand.brand_name, "brand created");
        Ok(())
    }

    async fn create_exhibitor(&self, exhibitor: &NewExhibitor) -> Result<(), BrandApiError> {
        let response = self.post_json(paths::ADD_EXHIBITOR, exhibitor).await?;
        let status = response.status();
        if status.is_success() {
            tracing::info!(company = %exhibitor.company, "exhibitor created");
            return Ok(());
        }

        // A body we cannot read or parse falls back to the generic message.
        let text = response.text().await.unwrap_or_default();
        let message = exhibitor_error_message(&text);
        tracing::warn!(status = status.as_u16(), %message, "exhibitor creation failed");
        Err(BrandApiError::ExhibitorCreation(message))
    }

    async fn update_brand(&self, edit: &BrandEdit) -> Result<(), BrandApiError> {
        let response = self.post_json(paths::EDIT_BRAND, edit).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), brand_id = %edit.brand_id, "brand update failed");
            return Err(BrandApiError::http(status.as_u16(), UPDATE_BRAND_FAILED));
        }
        tracing::info!(brand_id = %edit.brand_id, "brand updated");
        Ok(())
    }
}

/// Unwraps `{ "data": [...] }`. Anything else is a data format error.
pub fn parse_brand_envelope(body: &str) -> Result<Vec<Brand>, BrandApiError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| BrandApiError::data_format())?;

    let Some(data) = value.get("data").filter(|data| data.is_array()) else {
        return Err(BrandApiError::data_format());
    };

    serde_json::from_value(data.clone()).map_err(|e| {
        tracing::warn!(error = %e, "brand entry did not match the expected shape");
        BrandApiError::data_format()
    })
}

fn exhibitor_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| ADD_EXHIBITOR_FAILED.to_string())
}
