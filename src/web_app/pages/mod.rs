// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - BrandsPage: Brand list with the create and edit forms

pub mod brands;

// Re-export page components
pub use brands::{BrandDeskView, BrandsPage, DeskActions};
