// web_app/components/forms.rs - The three brand page forms
//
// Each form reads and writes its own slice of the page's `BrandDesk`
// signal. Submission is handed to the page through `on_submit`.

use leptos::prelude::*;

use super::common::{FieldList, FormShell};
use crate::web_app::model::{BrandEdit, NewBrand, NewExhibitor};
use crate::web_app::state::{BrandDesk, FormFields, UnknownField};

fn log_rejected(result: Result<(), UnknownField>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "ignored form input");
    }
}

/// Create-brand form
#[component]
pub fn CreateBrandForm(desk: RwSignal<BrandDesk>, on_submit: Callback<()>) -> impl IntoView {
    let value_of = Callback::new(move |name: &'static str| {
        desk.with(|d| d.brand_form.fields.field(name).unwrap_or_default().to_string())
    });
    let on_input = Callback::new(move |(name, value): (&'static str, String)| {
        desk.update(|d| log_rejected(d.set_brand_field(name, &value)));
    });
    let on_cancel = Callback::new(move |()| desk.update(BrandDesk::hide_brand_form));

    view! {
        <section class="mb-8">
            <h2 class="text-2xl font-bold mb-4">{NewBrand::TITLE}</h2>
            <FormShell
                submit_label=Signal::derive(move || desk.with(|d| d.brand_form.submit_label()))
                submitting=Signal::derive(move || desk.with(|d| d.brand_form.submitting))
                on_submit=on_submit
                on_cancel=on_cancel
            >
                <FieldList fields=NewBrand::FIELDS value_of=value_of on_input=on_input />
            </FormShell>
        </section>
    }
}

/// Create-exhibitor form
#[component]
pub fn CreateExhibitorForm(desk: RwSignal<BrandDesk>, on_submit: Callback<()>) -> impl IntoView {
    let value_of = Callback::new(move |name: &'static str| {
        desk.with(|d| d.exhibitor_form.fields.field(name).unwrap_or_default().to_string())
    });
    let on_input = Callback::new(move |(name, value): (&'static str, String)| {
        desk.update(|d| log_rejected(d.set_exhibitor_field(name, &value)));
    });
    let on_cancel = Callback::new(move |()| desk.update(BrandDesk::hide_exhibitor_form));

    view! {
        <section class="mb-8">
            <h2 class="text-2xl font-bold mb-4">{NewExhibitor::TITLE}</h2>
            <FormShell
                submit_label=Signal::derive(move || desk.with(|d| d.exhibitor_form.submit_label()))
                submitting=Signal::derive(move || desk.with(|d| d.exhibitor_form.submitting))
                on_submit=on_submit
                on_cancel=on_cancel
                accent="bg-green-500 hover:bg-green-600 focus:ring-green-500"
            >
                <FieldList fields=NewExhibitor::FIELDS value_of=value_of on_input=on_input />
            </FormShell>
        </section>
    }
}

/// Edit form for the brand in the page's edit slot; rendered inside a modal
#[component]
pub fn EditBrandForm(
    desk: RwSignal<BrandDesk>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let value_of = Callback::new(move |name: &'static str| {
        desk.with(|d| d.edit_form.fields.field(name).unwrap_or_default().to_string())
    });
    let on_input = Callback::new(move |(name, value): (&'static str, String)| {
        desk.update(|d| log_rejected(d.set_edit_field(name, &value)));
    });

    view! {
        <FormShell
            submit_label=Signal::derive(move || desk.with(|d| d.edit_form.submit_label()))
            submitting=Signal::derive(move || desk.with(|d| d.edit_form.submitting))
            on_submit=on_submit
            on_cancel=on_cancel
        >
            <FieldList fields=BrandEdit::FIELDS value_of=value_of on_input=on_input />
        </FormShell>
    }
}
