use serde::{Deserialize, Serialize};

use super::ContentKind;

/// Homepage hero slider.
pub struct Hero;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_href: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl HeroSlide {
    fn seeded(title: &str, subtitle: &str, cta_label: &str, cta_href: &str, image: &str) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            cta_label: cta_label.into(),
            cta_href: cta_href.into(),
            image: image.into(),
            alt: Some(title.into()),
            active: Some(true),
        }
    }
}

impl ContentKind for Hero {
    type Fields = HeroSlide;

    const KEY: &'static str = "hero";
    const ITEM: &'static str = "slide";
    const ITEMS: &'static str = "slides";
    const REQUIRED: &'static [&'static str] = &["title", "subtitle", "ctaLabel", "ctaHref", "image"];
    const FIELDS: &'static [&'static str] =
        &["title", "subtitle", "ctaLabel", "ctaHref", "image", "alt", "active"];

    fn seed() -> Vec<HeroSlide> {
        vec![
            HeroSlide::seeded(
                "Engineering Excellence",
                "Delivering infrastructure that stands the test of time",
                "Our Services",
                "/services",
                "/images/hero/engineering.jpg",
            ),
            HeroSlide::seeded(
                "Building Tomorrow",
                "Construction and project management from concept to handover",
                "View Projects",
                "/projects",
                "/images/hero/construction.jpg",
            ),
            HeroSlide::seeded(
                "Trusted Partners",
                "Decades of experience across public and private sectors",
                "Contact Us",
                "/contact",
                "/images/hero/partners.jpg",
            ),
        ]
    }
}
