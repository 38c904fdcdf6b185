// web_app/mod.rs - Root module for the Leptos web application
//
// This module contains all the components and logic for the brand
// management page built with the Leptos framework.
//
// Architecture:
// - model/: Brand and exhibitor types plus write payloads (client and server)
// - tags.rs: Product tag formatting (client and server)
// - error.rs: Error type shared by every layer that talks to the brands API
// - api/: The BrandApi seam and its reqwest implementation (server only)
// - state/: Page and form state records (client and server)
// - controller.rs: Async flows that drive the state through a BrandApi
// - server_fns.rs: Server function declarations (both client and server)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod tags;
pub mod error;
pub mod api;
pub mod state;
pub mod controller;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
