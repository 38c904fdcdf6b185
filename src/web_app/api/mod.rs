// web_app/api/mod.rs - Remote data access for brands and exhibitors
//
// `BrandApi` is the seam the page controller talks to. On the server it is
// implemented by the reqwest-backed `ApiClient`; in the browser by
// `server_fns::ServerFnApi`, which forwards to the server.

use crate::web_app::error::BrandApiError;
use crate::web_app::model::{Brand, BrandEdit, NewBrand, NewExhibitor};

cfg_if::cfg_if! {
    if #[cfg(feature = "api-client")] {
        pub mod client;
        pub mod config;
        pub mod shared;

        pub use client::ApiClient;
        pub use config::ApiConfig;
    }
}

/// Paths of the brands API, relative to its base URL
pub mod paths {
    pub const LIST_BRANDS: &str = "api/brands";
    pub const ADD_BRAND: &str = "api/brands/add";
    pub const ADD_EXHIBITOR: &str = "api/brands/exhibitor/add";
    pub const EDIT_BRAND: &str = "api/brands/edit";
}

/// The four operations the brand page needs from the backend.
///
/// Each call is awaited once; there are no retries and no cancellation.
#[allow(async_fn_in_trait)]
pub trait BrandApi {
    /// Fetch every brand, unwrapped from the `{ data: [...] }` envelope.
    async fn list_brands(&self) -> Result<Vec<Brand>, BrandApiError>;

    async fn create_brand(&self, brand: &NewBrand) -> Result<(), BrandApiError>;

    /// On failure, carries the API's own `error` message when it sent one.
    async fn create_exhibitor(&self, exhibitor: &NewExhibitor) -> Result<(), BrandApiError>;

    async fn update_brand(&self, edit: &BrandEdit) -> Result<(), BrandApiError>;
}
