// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Loading, FormShell, Modal, Badge, ...)
// - brand.rs: Brand display components (BrandCardView, BrandGrid)
// - forms.rs: Create-brand, create-exhibitor and edit-brand forms

pub mod common;
pub mod brand;
pub mod forms;

// Re-export commonly used components for convenience
pub use common::*;
pub use brand::*;
pub use forms::*;
