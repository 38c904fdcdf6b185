// web_app/components/brand.rs - Brand display components
//
// Components for displaying brands including:
// - BrandCardView: One card with image, tags, placement and exhibitor
// - ExhibitorBlock: The exhibitor strip at the bottom of a card
// - BrandGrid: Grid layout for all cards

use leptos::prelude::*;

use super::common::TagList;
use crate::web_app::state::{BrandCard, ExhibitorCard};

/// Brand card
///
/// The pencil button asks the page to open the edit form for this brand.
#[component]
pub fn BrandCardView(
    card: BrandCard,
    /// Receives the brand id
    on_edit: Callback<String>,
) -> impl IntoView {
    let BrandCard {
        brand_id,
        name,
        description,
        image_url,
        tags,
        placement,
        location,
        exhibitor,
    } = card;

    view! {
        <div class="relative bg-white rounded-xl shadow-sm hover:shadow-lg transition-shadow border border-gray-100 p-6">
            <button
                class="absolute top-4 right-4 z-10 bg-white/90 p-2 rounded-full shadow hover:bg-gray-100"
                title="Edit brand"
                on:click=move |_| on_edit.run(brand_id.clone())
            >
                <svg class="w-5 h-5 text-gray-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15.232 5.232l3.536 3.536m-2.036-5.036a2.5 2.5 0 113.536 3.536L6.5 21.036H3v-3.572L16.732 3.732z"></path>
                </svg>
            </button>

            <div class="relative h-48 mb-4">
                <img src=image_url alt=name.clone() class="h-full w-full rounded-lg object-cover" />
            </div>

            <div class="space-y-4">
                <TagList tags=tags />

                <div class="flex items-center justify-between">
                    <span class="text-gray-500">{placement}</span>
                </div>

                <h2 class="text-xl font-semibold">{name}</h2>
                <p class="text-gray-600">{description}</p>

                {exhibitor.map(|exhibitor| view! { <ExhibitorBlock exhibitor=exhibitor /> })}

                <div class="text-sm text-gray-500">
                    "Location: " {location}
                </div>
            </div>
        </div>
    }
}

/// Exhibitor strip shown only when the brand's exhibitor resolved
#[component]
pub fn ExhibitorBlock(exhibitor: ExhibitorCard) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4 pt-4 border-t">
            <img
                src=exhibitor.picture_url
                alt=exhibitor.name.clone()
                class="w-12 h-12 rounded-full object-cover"
            />
            <div>
                <p class="font-semibold">{exhibitor.name}</p>
                <p class="text-sm text-gray-500">{exhibitor.position}</p>
                <p class="text-sm text-gray-500">{exhibitor.company}</p>
            </div>
        </div>
    }
}

/// Grid of brand cards
#[component]
pub fn BrandGrid(
    #[prop(into)]
    cards: Signal<Vec<BrandCard>>,
    on_edit: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            // Rebuilt whenever the list reloads; an edit can change any field
            {move || {
                cards
                    .get()
                    .into_iter()
                    .map(|card| view! { <BrandCardView card=card on_edit=on_edit /> })
                    .collect_view()
            }}
        </div>
        <Show when=move || cards.with(Vec::is_empty)>
            <p class="text-center text-gray-500 py-12">"No brands yet."</p>
        </Show>
    }
}
