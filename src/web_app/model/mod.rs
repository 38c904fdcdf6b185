// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON exchanged with the brands API. Field names
// follow the backend's keys, including the capitalised identifiers.

use serde::{Deserialize, Deserializer, Serialize};

/// Exhibitor record embedded in a brand
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exhibitor {
    #[serde(rename = "ExhibitorID", deserialize_with = "string_or_number")]
    pub exhibitor_id: String,
    pub company: String,
    pub name: String,
    pub position: String,
    pub profile_picture: String,
}

/// Brand as returned by the list endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(rename = "BrandID", deserialize_with = "string_or_number")]
    pub brand_id: String,
    pub brand_name: String,
    pub image_url: String,
    pub description: String,
    #[serde(deserialize_with = "string_or_number")]
    pub stand_number: String,
    /// Comma-delimited; see `tags::format_tags` for the display form
    pub product_tag: String,
    pub location: String,
    pub hall: String,
    #[serde(deserialize_with = "string_or_number")]
    pub exhibitor_id: String,
    /// Null when the backend cannot resolve the exhibitor
    #[serde(default)]
    pub exhibitor: Option<Exhibitor>,
}

/// Success envelope of `GET /api/brands`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BrandEnvelope {
    pub data: Vec<Brand>,
}

/// Body of a failed exhibitor creation
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
}

/// Payload of `POST /api/brands/add`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBrand {
    pub brand_name: String,
    pub brands_image: String,
    pub stand_number: String,
    pub description: String,
    pub product_tag: String,
    pub location: String,
    pub hall: String,
    pub exhibitor_id: String,
}

/// Payload of `POST /api/brands/exhibitor/add`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExhibitor {
    pub name: String,
    pub profile_picture: String,
    pub position: String,
    pub company: String,
}

/// Payload of `POST /api/brands/edit`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandEdit {
    pub brand_id: String,
    pub brand_name: String,
    pub brands_image: String,
    pub stand_number: String,
    pub description: String,
    pub product_tag: String,
    pub location: String,
    pub hall: String,
    pub exhibitor_id: String,
}

impl From<&Brand> for BrandEdit {
    fn from(brand: &Brand) -> Self {
        Self {
            brand_id: brand.brand_id.clone(),
            brand_name: brand.brand_name.clone(),
            brands_image: brand.image_url.clone(),
            stand_number: brand.stand_number.clone(),
            description: brand.description.clone(),
            product_tag: brand.product_tag.clone(),
            location: brand.location.clone(),
            hall: brand.hall.clone(),
            exhibitor_id: brand.exhibitor_id.clone(),
        }
    }
}

/// Accepts `"12"` and `12` alike; identifiers are kept as strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand_json() -> serde_json::Value {
        serde_json::json!({
            "BrandID": "b-1",
            "brand_name": "Acme Audio",
            "image_url": "https://img.example/acme.png",
            "description": "Speakers",
            "stand_number": "A12",
            "product_tag": "audio, speakers",
            "location": "North wing",
            "hall": "Hall 3",
            "exhibitor_id": "e-9",
            "exhibitor": {
                "ExhibitorID": "e-9",
                "company": "Acme Ltd",
                "name": "Jo Park",
                "position": "Director",
                "profile_picture": "https://img.example/jo.png"
            }
        })
    }

    #[test]
    fn test_brand_deserializes_wire_names() {
        let brand: Brand = serde_json::from_value(brand_json()).unwrap();
        assert_eq!(brand.brand_id, "b-1");
        assert_eq!(brand.image_url, "https://img.example/acme.png");
        let exhibitor = brand.exhibitor.unwrap();
        assert_eq!(exhibitor.exhibitor_id, "e-9");
        assert_eq!(exhibitor.company, "Acme Ltd");
    }

    #[test]
    fn test_brand_with_null_exhibitor() {
        let mut json = brand_json();
        json["exhibitor"] = serde_json::Value::Null;
        let brand: Brand = serde_json::from_value(json).unwrap();
        assert!(brand.exhibitor.is_none());
    }

    #[test]
    fn test_brand_without_exhibitor_key() {
        let mut json = brand_json();
        json.as_object_mut().unwrap().remove("exhibitor");
        let brand: Brand = serde_json::from_value(json).unwrap();
        assert!(brand.exhibitor.is_none());
    }

    #[test]
    fn test_numeric_identifiers_become_strings() {
        let mut json = brand_json();
        json["BrandID"] = serde_json::json!(42);
        json["exhibitor_id"] = serde_json::json!(7);
        json["stand_number"] = serde_json::json!(12);
        json["exhibitor"]["ExhibitorID"] = serde_json::json!(7);

        let brand: Brand = serde_json::from_value(json).unwrap();
        assert_eq!(brand.brand_id, "42");
        assert_eq!(brand.exhibitor_id, "7");
        assert_eq!(brand.stand_number, "12");
        assert_eq!(brand.exhibitor.unwrap().exhibitor_id, "7");
    }

    #[test]
    fn test_brand_edit_from_brand_maps_image_and_id() {
        let brand: Brand = serde_json::from_value(brand_json()).unwrap();
        let edit = BrandEdit::from(&brand);
        assert_eq!(edit.brand_id, "b-1");
        assert_eq!(edit.brands_image, brand.image_url);
        assert_eq!(edit.product_tag, "audio, speakers");
    }

    #[test]
    fn test_new_brand_serializes_request_keys() {
        let body = serde_json::to_value(NewBrand {
            brand_name: "Acme".to_string(),
            brands_image: "https://img.example/a.png".to_string(),
            ..NewBrand::default()
        })
        .unwrap();

        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        for key in [
            "brand_name", "brands_image", "stand_number", "description",
            "product_tag", "location", "hall", "exhibitor_id",
        ] {
            assert!(keys.contains(&key), "missing key {key}");
        }
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn test_error_body_without_error_field() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());
    }
}
