// web_app/state/mod.rs - Page state for the brand desk
//
// `BrandDesk` is the single record behind the page: the list's load state,
// the three forms, the edit target and the shared form error. It changes
// only through the methods below, so the same transitions drive the Leptos
// page and the tests.

pub mod cards;
pub mod forms;

pub use cards::{BrandCard, ExhibitorCard};
pub use forms::{FieldSpec, FormFields, FormState, InputKind, UnknownField};

use crate::web_app::error::BrandApiError;
use crate::web_app::model::{Brand, BrandEdit, NewBrand, NewExhibitor};

/// Load state of the brand list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PageState {
    #[default]
    Loading,
    Error(String),
    Ready(Vec<Brand>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrandDesk {
    pub page: PageState,
    /// Inline message for the last failed form action
    pub error: Option<String>,
    pub brand_form: FormState<NewBrand>,
    pub exhibitor_form: FormState<NewExhibitor>,
    pub edit_form: FormState<BrandEdit>,
    /// Brand whose edit modal is open; at most one
    pub editing: Option<String>,
    /// Bumped by every `begin_load`; only the latest load may land
    load_generation: u64,
}

impl BrandDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brands(&self) -> &[Brand] {
        match &self.page {
            PageState::Ready(brands) => brands.as_slice(),
            _ => &[],
        }
    }

    pub fn cards(&self) -> Vec<BrandCard> {
        self.brands().iter().map(BrandCard::from).collect()
    }

    pub fn is_loading(&self) -> bool {
        self.page == PageState::Loading
    }

    /// Enter Loading and return the generation the caller must hand back.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.page = PageState::Loading;
        self.load_generation
    }

    /// Apply a list result. Results of a superseded load are dropped, so an
    /// older response arriving late never replaces a newer list.
    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<Vec<Brand>, BrandApiError>,
    ) -> bool {
        if generation != self.load_generation {
            return false;
        }
        self.page = match result {
            Ok(brands) => PageState::Ready(brands),
            Err(e) => PageState::Error(e.to_string()),
        };
        true
    }

    pub fn toggle_brand_form(&mut self) {
        self.brand_form.toggle();
        if !self.brand_form.visible {
            self.error = None;
        }
    }

    /// Closing a form also drops the error it may have left behind.
    pub fn hide_brand_form(&mut self) {
        self.brand_form.hide();
        self.error = None;
    }

    pub fn toggle_exhibitor_form(&mut self) {
        self.exhibitor_form.toggle();
        if !self.exhibitor_form.visible {
            self.error = None;
        }
    }

    pub fn hide_exhibitor_form(&mut self) {
        self.exhibitor_form.hide();
        self.error = None;
    }

    pub fn brand_toggle_label(&self) -> &'static str {
        if self.brand_form.visible {
            "Hide Brand Form"
        } else {
            "Add New Brand"
        }
    }

    pub fn exhibitor_toggle_label(&self) -> &'static str {
        if self.exhibitor_form.visible {
            "Hide Exhibitor Form"
        } else {
            "Add New Exhibitor"
        }
    }

    pub fn set_brand_field(&mut self, name: &str, value: &str) -> Result<(), UnknownField> {
        self.brand_form.fields.set_field(name, value)
    }

    pub fn set_exhibitor_field(&mut self, name: &str, value: &str) -> Result<(), UnknownField> {
        self.exhibitor_form.fields.set_field(name, value)
    }

    pub fn set_edit_field(&mut self, name: &str, value: &str) -> Result<(), UnknownField> {
        self.edit_form.fields.set_field(name, value)
    }

    pub fn begin_create_brand(&mut self) -> Option<NewBrand> {
        self.brand_form.begin_submit(&mut self.error)
    }

    /// Returns `true` when the list should be refreshed.
    pub fn finish_create_brand(&mut self, result: Result<(), BrandApiError>) -> bool {
        self.brand_form.finish_submit(result, &mut self.error)
    }

    pub fn begin_create_exhibitor(&mut self) -> Option<NewExhibitor> {
        self.exhibitor_form.begin_submit(&mut self.error)
    }

    pub fn finish_create_exhibitor(&mut self, result: Result<(), BrandApiError>) -> bool {
        self.exhibitor_form.finish_submit(result, &mut self.error)
    }

    pub fn is_editing(&self, brand_id: &str) -> bool {
        self.editing.as_deref() == Some(brand_id)
    }

    /// Open the edit form seeded with `brand`'s current values.
    ///
    /// Replaces any brand already being edited and starts without an error.
    /// Ignored while an edit is being saved.
    pub fn begin_edit(&mut self, brand: &Brand) {
        if self.edit_form.submitting {
            return;
        }
        self.error = None;
        self.editing = Some(brand.brand_id.clone());
        self.edit_form.fields = BrandEdit::from(brand);
        self.edit_form.visible = true;
    }

    /// Look `brand_id` up in the loaded list and start editing it.
    pub fn begin_edit_by_id(&mut self, brand_id: &str) -> bool {
        let Some(brand) = self.brands().iter().find(|b| b.brand_id == brand_id).cloned() else {
            return false;
        };
        self.begin_edit(&brand);
        self.is_editing(brand_id)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.edit_form.hide();
        self.error = None;
    }

    pub fn begin_update_brand(&mut self) -> Option<BrandEdit> {
        self.editing.as_ref()?;
        self.edit_form.begin_submit(&mut self.error)
    }

    pub fn finish_update_brand(&mut self, result: Result<(), BrandApiError>) -> bool {
        let saved = self.edit_form.finish_submit(result, &mut self.error);
        if saved {
            self.editing = None;
        }
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(id: &str, name: &str) -> Brand {
        Brand {
            brand_id: id.to_string(),
            brand_name: name.to_string(),
            image_url: format!("https://img.example/{id}.png"),
            description: "desc".to_string(),
            stand_number: "A1".to_string(),
            product_tag: "x, y".to_string(),
            location: "Main".to_string(),
            hall: "Hall 1".to_string(),
            exhibitor_id: "e1".to_string(),
            exhibitor: None,
        }
    }

    fn load(desk: &mut BrandDesk, result: Result<Vec<Brand>, BrandApiError>) {
        let generation = desk.begin_load();
        assert!(desk.finish_load(generation, result));
    }

    #[test]
    fn test_desk_starts_loading() {
        let desk = BrandDesk::new();
        assert!(desk.is_loading());
        assert!(desk.cards().is_empty());
        assert!(desk.error.is_none());
        assert!(desk.editing.is_none());
    }

    #[test]
    fn test_finish_load_ready_and_error() {
        let mut desk = BrandDesk::new();
        load(&mut desk, Ok(vec![brand("1", "A"), brand("2", "B")]));
        assert_eq!(desk.cards().len(), 2);

        let generation = desk.begin_load();
        assert!(desk.is_loading());
        assert!(desk.finish_load(generation, Err(BrandApiError::data_format())));
        assert_eq!(
            desk.page,
            PageState::Error("Invalid data format received from API".to_string())
        );
        assert!(desk.cards().is_empty());
    }

    #[test]
    fn test_toggle_labels() {
        let mut desk = BrandDesk::new();
        assert_eq!(desk.brand_toggle_label(), "Add New Brand");
        desk.toggle_brand_form();
        assert_eq!(desk.brand_toggle_label(), "Hide Brand Form");
        desk.hide_brand_form();
        assert!(!desk.brand_form.visible);

        desk.toggle_exhibitor_form();
        assert_eq!(desk.exhibitor_toggle_label(), "Hide Exhibitor Form");
        desk.toggle_exhibitor_form();
        assert_eq!(desk.exhibitor_toggle_label(), "Add New Exhibitor");
    }

    #[test]
    fn test_edit_seed_is_identity() {
        let mut desk = BrandDesk::new();
        let target = brand("7", "Seven");
        desk.begin_edit(&target);

        let fields = &desk.edit_form.fields;
        assert_eq!(fields.brand_id, target.brand_id);
        assert_eq!(fields.brand_name, target.brand_name);
        assert_eq!(fields.brands_image, target.image_url);
        assert_eq!(fields.stand_number, target.stand_number);
        assert_eq!(fields.description, target.description);
        assert_eq!(fields.product_tag, target.product_tag);
        assert_eq!(fields.location, target.location);
        assert_eq!(fields.hall, target.hall);
        assert_eq!(fields.exhibitor_id, target.exhibitor_id);
        assert!(desk.is_editing("7"));
    }

    #[test]
    fn test_second_edit_replaces_target() {
        let mut desk = BrandDesk::new();
        load(&mut desk, Ok(vec![brand("1", "One"), brand("2", "Two")]));

        assert!(desk.begin_edit_by_id("1"));
        desk.set_edit_field("brand_name", "changed").unwrap();
        assert!(desk.begin_edit_by_id("2"));

        assert_eq!(desk.editing.as_deref(), Some("2"));
        assert!(!desk.is_editing("1"));
        assert_eq!(desk.edit_form.fields.brand_name, "Two");
    }

    #[test]
    fn test_begin_edit_by_unknown_id() {
        let mut desk = BrandDesk::new();
        load(&mut desk, Ok(vec![brand("1", "One")]));
        assert!(!desk.begin_edit_by_id("404"));
        assert!(desk.editing.is_none());
    }

    #[test]
    fn test_cancel_edit_clears_target() {
        let mut desk = BrandDesk::new();
        desk.begin_edit(&brand("1", "One"));
        desk.cancel_edit();
        assert!(desk.editing.is_none());
        assert!(!desk.edit_form.visible);
        assert_eq!(desk.begin_update_brand(), None);
    }

    #[test]
    fn test_update_success_closes_edit() {
        let mut desk = BrandDesk::new();
        desk.begin_edit(&brand("1", "One"));
        let payload = desk.begin_update_brand().unwrap();
        assert_eq!(payload.brand_id, "1");

        assert!(desk.finish_update_brand(Ok(())));
        assert!(desk.editing.is_none());
        assert_eq!(desk.edit_form.fields, BrandEdit::default());
    }

    #[test]
    fn test_update_failure_keeps_modal_open() {
        let mut desk = BrandDesk::new();
        desk.begin_edit(&brand("1", "One"));
        desk.begin_update_brand().unwrap();

        let refresh = desk.finish_update_brand(Err(BrandApiError::http(500, "Failed to update brand")));
        assert!(!refresh);
        assert!(desk.is_editing("1"));
        assert_eq!(desk.error.as_deref(), Some("Failed to update brand"));
        assert_eq!(desk.edit_form.fields.brand_name, "One");
    }

    #[test]
    fn test_edit_target_locked_while_saving() {
        let mut desk = BrandDesk::new();
        desk.begin_edit(&brand("1", "One"));
        desk.begin_update_brand().unwrap();
        desk.begin_edit(&brand("2", "Two"));
        assert!(desk.is_editing("1"));
    }

    #[test]
    fn test_form_error_leaves_list_untouched() {
        let mut desk = BrandDesk::new();
        load(&mut desk, Ok(vec![brand("1", "One")]));
        desk.toggle_brand_form();

        assert_eq!(desk.begin_create_brand(), None);
        assert_eq!(desk.error.as_deref(), Some("Brand Name is required"));
        assert_eq!(desk.cards().len(), 1);
        assert!(desk.brand_form.visible);
    }

    #[test]
    fn test_superseded_load_is_dropped() {
        let mut desk = BrandDesk::new();
        let older = desk.begin_load();
        let newer = desk.begin_load();

        assert!(desk.finish_load(newer, Ok(vec![brand("1", "Edited")])));
        assert!(!desk.finish_load(older, Ok(vec![brand("1", "Stale")])));

        assert_eq!(desk.brands()[0].brand_name, "Edited");
    }

    #[test]
    fn test_older_load_waits_for_newer_one() {
        let mut desk = BrandDesk::new();
        let older = desk.begin_load();
        let newer = desk.begin_load();

        assert!(!desk.finish_load(older, Err(BrandApiError::data_format())));
        assert!(desk.is_loading());
        assert!(desk.finish_load(newer, Ok(vec![])));
        assert_eq!(desk.page, PageState::Ready(vec![]));
    }

    #[test]
    fn test_closing_a_form_drops_its_error() {
        let mut desk = BrandDesk::new();
        desk.toggle_exhibitor_form();
        desk.error = Some("duplicate company".to_string());
        desk.hide_exhibitor_form();
        assert!(desk.error.is_none());

        desk.toggle_brand_form();
        desk.error = Some("Brand Name is required".to_string());
        desk.toggle_brand_form();
        assert!(desk.error.is_none());
    }

    #[test]
    fn test_edit_modal_opens_and_closes_without_stale_error() {
        let mut desk = BrandDesk::new();
        desk.error = Some("duplicate company".to_string());
        desk.begin_edit(&brand("1", "One"));
        assert!(desk.error.is_none());

        desk.error = Some("Failed to update brand".to_string());
        desk.cancel_edit();
        assert!(desk.error.is_none());
    }
}
