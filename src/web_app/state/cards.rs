// web_app/state/cards.rs - Display models for the brand grid
//
// Everything a card shows, derived once from a `Brand`. Components render
// these without touching the raw model.

use crate::web_app::model::{Brand, Exhibitor};
use crate::web_app::tags::format_tags;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExhibitorCard {
    pub name: String,
    pub position: String,
    pub company: String,
    pub picture_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrandCard {
    pub brand_id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    /// "<hall> - <stand>"
    pub placement: String,
    pub location: String,
    /// Absent when the brand's exhibitor could not be resolved
    pub exhibitor: Option<ExhibitorCard>,
}

impl From<&Exhibitor> for ExhibitorCard {
    fn from(exhibitor: &Exhibitor) -> Self {
        Self {
            name: exhibitor.name.clone(),
            position: exhibitor.position.clone(),
            company: exhibitor.company.clone(),
            picture_url: exhibitor.profile_picture.clone(),
        }
    }
}

impl From<&Brand> for BrandCard {
    fn from(brand: &Brand) -> Self {
        Self {
            brand_id: brand.brand_id.clone(),
            name: brand.brand_name.clone(),
            description: brand.description.clone(),
            image_url: brand.image_url.clone(),
            tags: format_tags(&brand.product_tag),
            placement: format!("{} - {}", brand.hall, brand.stand_number),
            location: brand.location.clone(),
            exhibitor: brand.exhibitor.as_ref().map(ExhibitorCard::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand() -> Brand {
        Brand {
            brand_id: "b-1".to_string(),
            brand_name: "Acme Audio".to_string(),
            image_url: "https://img.example/acme.png".to_string(),
            description: "Speakers".to_string(),
            stand_number: "A12".to_string(),
            product_tag: "audio,, speakers ".to_string(),
            location: "North wing".to_string(),
            hall: "Hall 3".to_string(),
            exhibitor_id: "e-9".to_string(),
            exhibitor: Some(Exhibitor {
                exhibitor_id: "e-9".to_string(),
                company: "Acme Ltd".to_string(),
                name: "Jo Park".to_string(),
                position: "Director".to_string(),
                profile_picture: "https://img.example/jo.png".to_string(),
            }),
        }
    }

    #[test]
    fn test_card_from_brand() {
        let card = BrandCard::from(&brand());
        assert_eq!(card.name, "Acme Audio");
        assert_eq!(card.tags, vec!["audio", "speakers"]);
        assert_eq!(card.placement, "Hall 3 - A12");
        let exhibitor = card.exhibitor.unwrap();
        assert_eq!(exhibitor.company, "Acme Ltd");
        assert_eq!(exhibitor.picture_url, "https://img.example/jo.png");
    }

    #[test]
    fn test_card_without_exhibitor() {
        let mut brand = brand();
        brand.exhibitor = None;
        let card = BrandCard::from(&brand);
        assert!(card.exhibitor.is_none());
        assert_eq!(card.location, "North wing");
    }
}
