// web_app/pages/brands.rs - Brand management page
//
// Composes the brand grid and the three forms, and owns the page's
// `BrandDesk` signal. All network work goes through `PageController`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::controller::PageController;
use crate::web_app::server_fns::ServerFnApi;
use crate::web_app::state::{BrandDesk, PageState};

/// Coarse page status; only changes when the list load state does
#[derive(Clone, Debug, PartialEq, Eq)]
enum Status {
    Loading,
    Error(String),
    Ready,
}

impl From<&PageState> for Status {
    fn from(page: &PageState) -> Self {
        match page {
            PageState::Loading => Status::Loading,
            PageState::Error(message) => Status::Error(message.clone()),
            PageState::Ready(_) => Status::Ready,
        }
    }
}

/// Form submissions the page view can trigger
#[derive(Clone, Copy)]
pub struct DeskActions {
    pub submit_brand: Callback<()>,
    pub submit_exhibitor: Callback<()>,
    pub submit_edit: Callback<()>,
}

/// Brand page component
///
/// Owns the desk, loads the list once in the browser and wires the forms
/// to the controller.
#[component]
pub fn BrandsPage() -> impl IntoView {
    let desk = RwSignal::new(BrandDesk::new());
    let controller = PageController::new(ServerFnApi, desk);

    // Initial fetch, once, in the browser
    Effect::new(move || {
        spawn_local(async move { controller.mount().await });
    });

    let actions = DeskActions {
        submit_brand: Callback::new(move |()| {
            spawn_local(async move { controller.submit_brand().await });
        }),
        submit_exhibitor: Callback::new(move |()| {
            spawn_local(async move { controller.submit_exhibitor().await });
        }),
        submit_edit: Callback::new(move |()| {
            spawn_local(async move { controller.submit_edit().await });
        }),
    };

    view! { <BrandDeskView desk=desk actions=actions /> }
}

/// Renders whatever state the desk is in
///
/// Loading and list errors replace the whole view. The form error is shown
/// once: inside the edit modal while it is open, above the forms otherwise.
#[component]
pub fn BrandDeskView(desk: RwSignal<BrandDesk>, actions: DeskActions) -> impl IntoView {
    let status = Memo::new(move |_| desk.with(|d| Status::from(&d.page)));
    let cards = Memo::new(move |_| desk.with(BrandDesk::cards));
    let form_error = Memo::new(move |_| desk.with(|d| d.error.clone()));
    let brand_form_open = Memo::new(move |_| desk.with(|d| d.brand_form.visible));
    let exhibitor_form_open = Memo::new(move |_| desk.with(|d| d.exhibitor_form.visible));
    let editing = Memo::new(move |_| desk.with(|d| d.editing.clone()));

    let on_edit = Callback::new(move |brand_id: String| {
        desk.update(|d| {
            if !d.begin_edit_by_id(&brand_id) {
                tracing::warn!(%brand_id, "edit requested for a brand that is not loaded");
            }
        });
    });
    let on_cancel_edit = Callback::new(move |()| desk.update(BrandDesk::cancel_edit));

    let ready_view = move || {
        view! {
            <div class="min-h-screen p-8">
                <div class="flex justify-between items-center mb-8">
                    <h1 class="text-3xl font-bold">"API Request Results"</h1>
                    <div class="space-x-4">
                        <button
                            class="bg-blue-500 text-white px-4 py-2 rounded-md hover:bg-blue-600"
                            on:click=move |_| desk.update(BrandDesk::toggle_brand_form)
                        >
                            {move || desk.with(BrandDesk::brand_toggle_label)}
                        </button>
                        <button
                            class="bg-green-500 text-white px-4 py-2 rounded-md hover:bg-green-600"
                            on:click=move |_| desk.update(BrandDesk::toggle_exhibitor_form)
                        >
                            {move || desk.with(BrandDesk::exhibitor_toggle_label)}
                        </button>
                    </div>
                </div>

                {move || {
                    let error = form_error.get().filter(|_| editing.with(Option::is_none));
                    error.map(|error| view! {
                        <div class="mb-6 max-w-2xl">
                            <ErrorDisplay error=error />
                        </div>
                    })
                }}

                <Show when=move || exhibitor_form_open.get()>
                    <CreateExhibitorForm desk=desk on_submit=actions.submit_exhibitor />
                </Show>

                <Show when=move || brand_form_open.get()>
                    <CreateBrandForm desk=desk on_submit=actions.submit_brand />
                </Show>

                <BrandGrid cards=cards on_edit=on_edit />

                {move || editing.get().map(|_| view! {
                    <ModalWrapper title="Edit Brand" on_close=on_cancel_edit>
                        {move || form_error.get().map(|error| view! {
                            <div class="mb-4">
                                <ErrorDisplay error=error />
                            </div>
                        })}
                        <EditBrandForm
                            desk=desk
                            on_submit=actions.submit_edit
                            on_cancel=on_cancel_edit
                        />
                    </ModalWrapper>
                })}
            </div>
        }
    };

    view! {
        {move || match status.get() {
            Status::Loading => view! { <Loading /> }.into_any(),
            Status::Error(message) => view! {
                <div class="min-h-screen flex items-center justify-center">
                    <div class="text-2xl text-red-500">{format!("Error: {message}")}</div>
                </div>
            }.into_any(),
            Status::Ready => ready_view().into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::Brand;

    #[test]
    fn test_status_follows_page_state() {
        assert_eq!(Status::from(&PageState::Loading), Status::Loading);
        assert_eq!(
            Status::from(&PageState::Error("Failed to fetch brands".to_string())),
            Status::Error("Failed to fetch brands".to_string())
        );
        assert_eq!(Status::from(&PageState::Ready(vec![Brand::default()])), Status::Ready);
    }

    #[test]
    fn test_status_ignores_list_contents() {
        let one = Status::from(&PageState::Ready(vec![Brand::default()]));
        let none = Status::from(&PageState::Ready(vec![]));
        assert_eq!(one, none);
    }
}
