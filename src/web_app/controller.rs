// web_app/controller.rs - Async flows of the brand page
//
// Each flow reads a payload out of the desk, awaits the API, then writes the
// outcome back. The desk is never borrowed across an await, so the same code
// runs against a Leptos signal in the browser and a RefCell in tests.

use std::cell::RefCell;

use crate::web_app::api::BrandApi;
use crate::web_app::state::BrandDesk;

/// Short-lived mutable access to the page's `BrandDesk`.
pub trait DeskHandle {
    /// Run `f` on the desk. `None` when the desk no longer exists.
    fn with_desk<R>(&self, f: impl FnOnce(&mut BrandDesk) -> R) -> Option<R>;
}

impl DeskHandle for RefCell<BrandDesk> {
    fn with_desk<R>(&self, f: impl FnOnce(&mut BrandDesk) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<H: DeskHandle + ?Sized> DeskHandle for &H {
    fn with_desk<R>(&self, f: impl FnOnce(&mut BrandDesk) -> R) -> Option<R> {
        (**self).with_desk(f)
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl DeskHandle for leptos::prelude::RwSignal<BrandDesk> {
    fn with_desk<R>(&self, f: impl FnOnce(&mut BrandDesk) -> R) -> Option<R> {
        use leptos::prelude::Update;
        self.try_update(f)
    }
}

/// Drives a `BrandDesk` through a `BrandApi`.
#[derive(Clone, Copy, Debug)]
pub struct PageController<A, H> {
    api: A,
    desk: H,
}

impl<A: BrandApi, H: DeskHandle> PageController<A, H> {
    pub fn new(api: A, desk: H) -> Self {
        Self { api, desk }
    }

    pub fn desk(&self) -> &H {
        &self.desk
    }

    /// First load of the brand list.
    pub async fn mount(&self) {
        tracing::debug!("mounting brand page");
        self.refresh().await;
    }

    /// Re-enter Loading and fetch the list again.
    pub async fn refresh(&self) {
        let Some(generation) = self.desk.with_desk(BrandDesk::begin_load) else {
            return;
        };
        let result = self.api.list_brands().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "failed to load brands");
        }
        let applied = self.desk.with_desk(|desk| desk.finish_load(generation, result));
        if applied == Some(false) {
            tracing::debug!(generation, "dropped brand list from a superseded load");
        }
    }

    pub async fn submit_brand(&self) {
        let Some(payload) = self.desk.with_desk(BrandDesk::begin_create_brand).flatten() else {
            return;
        };
        let result = self.api.create_brand(&payload).await;
        self.refresh_if(|desk| desk.finish_create_brand(result)).await;
    }

    pub async fn submit_exhibitor(&self) {
        let Some(payload) = self.desk.with_desk(BrandDesk::begin_create_exhibitor).flatten() else {
            return;
        };
        let result = self.api.create_exhibitor(&payload).await;
        self.refresh_if(|desk| desk.finish_create_exhibitor(result)).await;
    }

    pub async fn submit_edit(&self) {
        let Some(payload) = self.desk.with_desk(BrandDesk::begin_update_brand).flatten() else {
            return;
        };
        let result = self.api.update_brand(&payload).await;
        self.refresh_if(|desk| desk.finish_update_brand(result)).await;
    }

    /// Apply a write's outcome; a successful write is followed by a refresh.
    async fn refresh_if(&self, finish: impl FnOnce(&mut BrandDesk) -> bool) {
        if self.desk.with_desk(finish).unwrap_or(false) {
            self.refresh().await;
        }
    }
}
