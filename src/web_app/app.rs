// web_app/app.rs - Root application component
//
// Sets up meta tags, the stylesheet and routing for the brand page.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::BrandsPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Expo Brands" />
        <Meta name="description" content="Browse, add and edit expo brands and exhibitors" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/expo_brands.css" />

        <Router>
            <main class="min-h-screen bg-gray-50">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=BrandsPage />
                    <Route path=path!("/api-request") view=BrandsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to brands"
                </a>
            </div>
        </div>
    }
}
