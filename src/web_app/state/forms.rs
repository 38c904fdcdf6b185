// web_app/state/forms.rs - Editable field sets behind the three forms
//
// Each form is a flat record of string fields addressed by the input's
// `name` attribute. `FormState` adds visibility and the submitting flag.

use thiserror::Error;

use crate::web_app::error::BrandApiError;
use crate::web_app::model::{BrandEdit, NewBrand, NewExhibitor};
use crate::web_app::tags::format_tags;

/// Rendered control for a field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Url,
    TextArea,
    /// Carried in the payload, never shown
    Hidden,
}

impl InputKind {
    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Text | InputKind::TextArea => "text",
            InputKind::Url => "url",
            InputKind::Hidden => "hidden",
        }
    }
}

/// Static description of one form field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub placeholder: &'static str,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self {
            name,
            label,
            kind,
            placeholder: "",
        }
    }

    const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn is_required(&self) -> bool {
        self.kind != InputKind::Hidden
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

/// A flat record of string fields edited through a form.
pub trait FormFields: Clone + Default {
    /// Fields in display order
    const FIELDS: &'static [FieldSpec];
    const TITLE: &'static str;
    const SUBMIT_LABEL: &'static str;
    const SUBMITTING_LABEL: &'static str;

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// Update the field named by an input's `name` attribute.
    fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let slot = self
            .field_mut(name)
            .ok_or_else(|| UnknownField(name.to_string()))?;
        *slot = value.into();
        Ok(())
    }

    /// Label of the first required field that is still empty.
    fn missing_field(&self) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .filter(|spec| spec.is_required())
            .find(|spec| self.field(spec.name).is_some_and(str::is_empty))
            .map(|spec| spec.label)
    }
}

const BRAND_NAME: FieldSpec = FieldSpec::new("brand_name", "Brand Name", InputKind::Text);
const BRANDS_IMAGE: FieldSpec = FieldSpec::new("brands_image", "Image URL", InputKind::Url);
const STAND_NUMBER: FieldSpec = FieldSpec::new("stand_number", "Stand Number", InputKind::Text);
const HALL: FieldSpec = FieldSpec::new("hall", "Hall", InputKind::Text);
const DESCRIPTION: FieldSpec = FieldSpec::new("description", "Description", InputKind::TextArea);
const PRODUCT_TAG: FieldSpec =
    FieldSpec::new("product_tag", "Product Tags (comma-separated)", InputKind::Text)
        .with_placeholder("tag1, tag2, tag3");
const LOCATION: FieldSpec = FieldSpec::new("location", "Location", InputKind::Text);
const EXHIBITOR_ID: FieldSpec = FieldSpec::new("exhibitor_id", "Exhibitor ID", InputKind::Text);

impl FormFields for NewBrand {
    const FIELDS: &'static [FieldSpec] = &[
        BRAND_NAME, BRANDS_IMAGE, STAND_NUMBER, HALL, DESCRIPTION, PRODUCT_TAG, LOCATION,
        EXHIBITOR_ID,
    ];
    const TITLE: &'static str = "Add New Brand";
    const SUBMIT_LABEL: &'static str = "Add Brand";
    const SUBMITTING_LABEL: &'static str = "Adding...";

    fn field(&self, name: &str) -> Option<&str> {
        Some(match name {
            "brand_name" => self.brand_name.as_str(),
            "brands_image" => self.brands_image.as_str(),
            "stand_number" => self.stand_number.as_str(),
            "description" => self.description.as_str(),
            "product_tag" => self.product_tag.as_str(),
            "location" => self.location.as_str(),
            "hall" => self.hall.as_str(),
            "exhibitor_id" => self.exhibitor_id.as_str(),
            _ => return None,
        })
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "brand_name" => &mut self.brand_name,
            "brands_image" => &mut self.brands_image,
            "stand_number" => &mut self.stand_number,
            "description" => &mut self.description,
            "product_tag" => &mut self.product_tag,
            "location" => &mut self.location,
            "hall" => &mut self.hall,
            "exhibitor_id" => &mut self.exhibitor_id,
            _ => return None,
        })
    }
}

impl FormFields for NewExhibitor {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Name", InputKind::Text),
        FieldSpec::new("profile_picture", "Profile Picture URL", InputKind::Url),
        FieldSpec::new("position", "Position", InputKind::Text),
        FieldSpec::new("company", "Company", InputKind::Text),
    ];
    const TITLE: &'static str = "Add New Exhibitor";
    const SUBMIT_LABEL: &'static str = "Add Exhibitor";
    const SUBMITTING_LABEL: &'static str = "Adding...";

    fn field(&self, name: &str) -> Option<&str> {
        Some(match name {
            "name" => self.name.as_str(),
            "profile_picture" => self.profile_picture.as_str(),
            "position" => self.position.as_str(),
            "company" => self.company.as_str(),
            _ => return None,
        })
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "name" => &mut self.name,
            "profile_picture" => &mut self.profile_picture,
            "position" => &mut self.position,
            "company" => &mut self.company,
            _ => return None,
        })
    }
}

impl FormFields for BrandEdit {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("brand_id", "Brand ID", InputKind::Hidden),
        BRAND_NAME, BRANDS_IMAGE, STAND_NUMBER, HALL, DESCRIPTION, PRODUCT_TAG, LOCATION,
        EXHIBITOR_ID,
    ];
    const TITLE: &'static str = "Edit Brand";
    const SUBMIT_LABEL: &'static str = "Save Changes";
    const SUBMITTING_LABEL: &'static str = "Saving...";

    fn field(&self, name: &str) -> Option<&str> {
        Some(match name {
            "brand_id" => self.brand_id.as_str(),
            "brand_name" => self.brand_name.as_str(),
            "brands_image" => self.brands_image.as_str(),
            "stand_number" => self.stand_number.as_str(),
            "description" => self.description.as_str(),
            "product_tag" => self.product_tag.as_str(),
            "location" => self.location.as_str(),
            "hall" => self.hall.as_str(),
            "exhibitor_id" => self.exhibitor_id.as_str(),
            _ => return None,
        })
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "brand_id" => &mut self.brand_id,
            "brand_name" => &mut self.brand_name,
            "brands_image" => &mut self.brands_image,
            "stand_number" => &mut self.stand_number,
            "description" => &mut self.description,
            "product_tag" => &mut self.product_tag,
            "location" => &mut self.location,
            "hall" => &mut self.hall,
            "exhibitor_id" => &mut self.exhibitor_id,
            _ => return None,
        })
    }
}

/// One form's fields plus its visibility and submitting flag
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState<F> {
    pub fields: F,
    pub visible: bool,
    pub submitting: bool,
}

impl<F: FormFields> FormState<F> {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            F::SUBMITTING_LABEL
        } else {
            F::SUBMIT_LABEL
        }
    }

    /// Live preview of the tags typed so far; empty for forms without tags.
    pub fn tag_preview(&self) -> Vec<String> {
        self.fields
            .field("product_tag")
            .map(format_tags)
            .unwrap_or_default()
    }

    /// Start a submission and hand back the payload to send.
    ///
    /// Returns `None` while a submission is in flight, or when a required
    /// field is empty (the message goes to `error`).
    pub fn begin_submit(&mut self, error: &mut Option<String>) -> Option<F> {
        if self.submitting {
            return None;
        }
        if let Some(label) = self.fields.missing_field() {
            *error = Some(format!("{label} is required"));
            return None;
        }
        *error = None;
        self.submitting = true;
        Some(self.fields.clone())
    }

    /// Apply the outcome of a submission. Returns `true` when it succeeded.
    ///
    /// Success clears the fields and hides the form; failure keeps the
    /// input and stores the message in `error`.
    pub fn finish_submit(
        &mut self,
        result: Result<(), BrandApiError>,
        error: &mut Option<String>,
    ) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.fields = F::default();
                self.visible = false;
                true
            }
            Err(e) => {
                *error = Some(e.to_string());
                false
            }
        }
    }
}
