// fixtures/brands.rs
//
// Two exhibitors and three brands: two brands share one exhibitor and the
// third has an exhibitor the backend could not resolve (`null`).

use crate::fixtures::JsonFixture;
use crate::web_app::model::{Brand, BrandEnvelope, Exhibitor, NewBrand, NewExhibitor};

pub fn acme_exhibitor() -> Exhibitor {
    Exhibitor {
        exhibitor_id: "e-1".to_string(),
        company: "Acme Ltd".to_string(),
        name: "Jo Park".to_string(),
        position: "Sales Director".to_string(),
        profile_picture: "https://img.example/people/jo.png".to_string(),
    }
}

pub fn sample_brands() -> Vec<Brand> {
    vec![
        Brand {
            brand_id: "b-1".to_string(),
            brand_name: "Acme Audio".to_string(),
            image_url: "https://img.example/brands/acme-audio.png".to_string(),
            description: "Bookshelf speakers and amplifiers".to_string(),
            stand_number: "A12".to_string(),
            product_tag: "audio, speakers, amplifiers".to_string(),
            location: "North wing".to_string(),
            hall: "Hall 3".to_string(),
            exhibitor_id: "e-1".to_string(),
            exhibitor: Some(acme_exhibitor()),
        },
        Brand {
            brand_id: "b-2".to_string(),
            brand_name: "Acme Home".to_string(),
            image_url: "https://img.example/brands/acme-home.png".to_string(),
            description: "Smart lighting".to_string(),
            stand_number: "A14".to_string(),
            product_tag: "smart home,lighting,,".to_string(),
            location: "North wing".to_string(),
            hall: "Hall 3".to_string(),
            exhibitor_id: "e-1".to_string(),
            exhibitor: Some(acme_exhibitor()),
        },
        orphan_brand(),
    ]
}

/// Brand whose exhibitor reference does not resolve
pub fn orphan_brand() -> Brand {
    Brand {
        brand_id: "b-3".to_string(),
        brand_name: "Nordlys".to_string(),
        image_url: "https://img.example/brands/nordlys.png".to_string(),
        description: "Outdoor lamps".to_string(),
        stand_number: "C02".to_string(),
        product_tag: "lighting".to_string(),
        location: "Courtyard".to_string(),
        hall: "Hall 1".to_string(),
        exhibitor_id: "e-404".to_string(),
        exhibitor: None,
    }
}

/// A create-brand form with every field filled in
pub fn filled_new_brand() -> NewBrand {
    NewBrand {
        brand_name: "Lumen Labs".to_string(),
        brands_image: "https://img.example/brands/lumen.png".to_string(),
        stand_number: "B07".to_string(),
        description: "Desk lamps".to_string(),
        product_tag: " lighting , desk,".to_string(),
        location: "South wing".to_string(),
        hall: "Hall 2".to_string(),
        exhibitor_id: "e-2".to_string(),
    }
}

/// A create-exhibitor form with every field filled in
pub fn filled_new_exhibitor() -> NewExhibitor {
    NewExhibitor {
        name: "Sam Lee".to_string(),
        profile_picture: "https://img.example/people/sam.png".to_string(),
        position: "Founder".to_string(),
        company: "Lumen Labs".to_string(),
    }
}

/// `{ "data": [...] }` with every sample brand
pub struct BrandsFixture;

impl JsonFixture for BrandsFixture {
    fn json() -> serde_json::Value {
        serde_json::to_value(BrandEnvelope {
            data: sample_brands(),
        })
        .unwrap_or_default()
    }
}

/// A single brand whose `exhibitor` is `null`, with numeric identifiers
pub struct NullExhibitorFixture;

impl JsonFixture for NullExhibitorFixture {
    fn json() -> serde_json::Value {
        serde_json::json!({
            "data": [{
                "BrandID": 31,
                "brand_name": "Nordlys",
                "image_url": "https://img.example/brands/nordlys.png",
                "description": "Outdoor lamps",
                "stand_number": "C02",
                "product_tag": "lighting",
                "location": "Courtyard",
                "hall": "Hall 1",
                "exhibitor_id": 404,
                "exhibitor": null
            }]
        })
    }
}
