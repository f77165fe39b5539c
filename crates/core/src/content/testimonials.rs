use serde::{Deserialize, Serialize};

use super::ContentKind;
use crate::document::ValidationError;

pub struct Testimonials;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    pub position: String,
    pub message: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

fn default_rating() -> u8 {
    5
}

impl ContentKind for Testimonials {
    type Fields = Testimonial;

    const KEY: &'static str = "testimonials";
    const ITEM: &'static str = "testimonial";
    const ITEMS: &'static str = "testimonials";
    const REQUIRED: &'static [&'static str] = &["name", "position", "message"];
    const FIELDS: &'static [&'static str] =
        &["name", "position", "message", "rating", "image", "active"];

    fn seed() -> Vec<Testimonial> {
        [
            ("Thabo Nkosi", "Operations Director", "Delivered ahead of schedule and within budget."),
            ("Sarah Mokoena", "Municipal Engineer", "Professional, responsive and thorough on site."),
            ("David Pillay", "Property Developer", "Our go-to team for civil works."),
        ]
        .into_iter()
        .map(|(name, position, message)| Testimonial {
            name: name.into(),
            position: position.into(),
            message: message.into(),
            rating: 5,
            image: None,
            active: Some(true),
        })
        .collect()
    }

    fn validate(testimonial: &Testimonial) -> Result<(), ValidationError> {
        if (1..=5).contains(&testimonial.rating) {
            Ok(())
        } else {
            Err(ValidationError::invalid("rating", "must be between 1 and 5"))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rating_defaults_to_five() {
        let testimonial: Testimonial =
            serde_json::from_value(json!({ "name": "A", "position": "B", "message": "C" }))
                .unwrap();
        assert_eq!(testimonial.rating, 5);
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let mut testimonial = Testimonials::seed().remove(0);
        testimonial.rating = 0;
        assert!(Testimonials::validate(&testimonial).is_err());
        testimonial.rating = 6;
        assert!(Testimonials::validate(&testimonial).is_err());
        testimonial.rating = 1;
        assert!(Testimonials::validate(&testimonial).is_ok());
    }
}
