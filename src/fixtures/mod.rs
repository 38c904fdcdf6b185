// fixtures/mod.rs - Test fixtures module
//
// Reusable brand and exhibitor data for the test suites. Each fixture knows
// how to render itself as the JSON the brands API would send, so mock
// servers and unit tests start from the same records.

pub mod brands;

pub use brands::{BrandsFixture, NullExhibitorFixture};

/// A canned API response body
pub trait JsonFixture {
    /// The JSON body, exactly as the brands API would return it
    fn json() -> serde_json::Value;
}
