// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::{KeyboardEvent, SubmitEvent};

use crate::web_app::state::{FieldSpec, InputKind};
use crate::web_app::tags::format_tags;

/// Loading spinner component
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-2xl text-gray-500 font-medium animate-pulse">"Loading..."</span>
        </div>
    }
}

/// Error display component
///
/// Displays error messages with appropriate styling.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-4" role="alert">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <p class="text-red-600 text-sm">{error}</p>
        </div>
    }
}

pub(crate) fn submit_button_class(accent: &str) -> String {
    format!(
        "{accent} text-white px-4 py-2 rounded-md focus:outline-none focus:ring-2 \
         focus:ring-offset-2 disabled:opacity-50"
    )
}

const CANCEL_BUTTON_CLASS: &str = "bg-gray-200 text-gray-700 px-4 py-2 rounded-md hover:bg-gray-300 \
                                   focus:outline-none focus:ring-2 focus:ring-gray-500 focus:ring-offset-2";

/// Form wrapper with submit and cancel buttons
///
/// Prevents the browser's default navigation on submit.
#[component]
pub fn FormShell(
    children: Children,
    /// Current submit button text ("Add Brand", "Adding...", ...)
    #[prop(into)]
    submit_label: Signal<&'static str>,
    /// Disables the submit button while a request is in flight
    #[prop(into)]
    submitting: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    /// Background classes of the submit button
    #[prop(default = "bg-blue-500 hover:bg-blue-600 focus:ring-blue-500")]
    accent: &'static str,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form on:submit=handle_submit class="max-w-2xl space-y-6">
            <div class="space-y-4">
                {children()}
            </div>

            <div class="flex gap-4">
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class=submit_button_class(accent)
                >
                    {move || submit_label.get()}
                </button>
                <button
                    type="button"
                    class=CANCEL_BUTTON_CLASS
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

/// Labelled inputs for every visible field of a form
///
/// Each input reports `(name, value)` on change; the name is the field's
/// `name` attribute.
#[component]
pub fn FieldList(
    fields: &'static [FieldSpec],
    /// Current value of a field, by name
    value_of: Callback<&'static str, String>,
    on_input: Callback<(&'static str, String)>,
) -> impl IntoView {
    fields
        .iter()
        .filter(|spec| spec.kind != InputKind::Hidden)
        .map(|spec| view! { <FormField spec=*spec value_of=value_of on_input=on_input /> })
        .collect_view()
}

/// One labelled input, textarea for long text
///
/// The product tag field also shows a live preview of the parsed tags.
#[component]
pub fn FormField(
    spec: FieldSpec,
    value_of: Callback<&'static str, String>,
    on_input: Callback<(&'static str, String)>,
) -> impl IntoView {
    let name = spec.name;
    let input_class = "mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 shadow-sm \
                       focus:border-blue-500 focus:outline-none";

    let control = if spec.kind == InputKind::TextArea {
        view! {
            <textarea
                id=name
                name=name
                rows=3
                required=true
                class=input_class
                prop:value=move || value_of.run(name)
                on:input=move |ev| on_input.run((name, event_target_value(&ev)))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=spec.kind.html_type()
                id=name
                name=name
                required=true
                placeholder=spec.placeholder
                class=input_class
                prop:value=move || value_of.run(name)
                on:input=move |ev| on_input.run((name, event_target_value(&ev)))
            />
        }
        .into_any()
    };

    let preview = (name == "product_tag").then(|| {
        move || {
            let raw = value_of.run(name);
            (!raw.is_empty()).then(|| view! {
                <div class="mt-2">
                    <TagList tags=format_tags(&raw) />
                </div>
            })
        }
    });

    view! {
        <div>
            <label for=name class="block text-sm font-medium text-gray-700">
                {spec.label}
            </label>
            {control}
            {preview}
        </div>
    }
}

/// Rounded tag chips
#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags.into_iter().map(|tag| view! { <Badge>{tag}</Badge> }).collect_view()}
        </div>
    }
}

/// Keys that dismiss a modal
pub(crate) fn closes_modal(key: &str) -> bool {
    key == "Escape"
}

/// Modal wrapper component
///
/// Provides modal backdrop styling. The open/close logic should be
/// handled by the parent.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    title: &'static str,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if closes_modal(&ev.key()) {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-2xl shadow-2xl w-full max-w-2xl max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100 bg-gray-50/50">
                    <h2 class="text-2xl font-bold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                <div class="p-6 overflow-y-auto">
                    {children()}
                </div>
            </div>
        </div>
    }
}

const BADGE_CLASS: &str =
    "px-3 py-1 text-sm rounded-full bg-blue-100 text-blue-800 hover:bg-blue-200 transition-colors";

/// Badge component
///
/// A small rounded chip for tags.
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class=BADGE_CLASS>
            {children()}
        </span>
    }
}
