// web_app/error.rs - Errors surfaced by the brands API layer
//
// Every variant displays as the exact message the page shows to the user.

use thiserror::Error;

pub const FETCH_BRANDS_FAILED: &str = "Failed to fetch brands";
pub const INVALID_ENVELOPE: &str = "Invalid data format received from API";
pub const ADD_BRAND_FAILED: &str = "Failed to add brand";
pub const ADD_EXHIBITOR_FAILED: &str = "Failed to add exhibitor";
pub const UPDATE_BRAND_FAILED: &str = "Failed to update brand";

/// Errors returned by a [`BrandApi`](crate::web_app::api::BrandApi).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BrandApiError {
    /// The request never produced a response (connection, DNS, TLS, body read).
    #[error("Could not reach the brands API: {0}")]
    Network(String),

    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A 2xx response whose body is not the expected envelope.
    #[error("{0}")]
    DataFormat(String),

    /// Message supplied by the API when an exhibitor cannot be created.
    #[error("{0}")]
    ExhibitorCreation(String),

    /// Message relayed from a server function.
    #[error("{0}")]
    Server(String),
}

impl BrandApiError {
    pub fn http(status: u16, message: &str) -> Self {
        Self::Http {
            status,
            message: message.to_string(),
        }
    }

    pub fn data_format() -> Self {
        Self::DataFormat(INVALID_ENVELOPE.to_string())
    }
}

#[cfg(feature = "api-client")]
impl From<reqwest::Error> for BrandApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
