use serde::{Deserialize, Serialize};

use super::ContentKind;

/// Services offered, with their detail bullets and gallery.
pub struct Services;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub title: String,
    pub short_desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

fn service(title: &str, short_desc: &str, icon: &str, color: &str, details: &[&str]) -> Service {
    Service {
        title: title.into(),
        short_desc: short_desc.into(),
        icon: Some(icon.into()),
        color: Some(color.into()),
        details: details.iter().map(|d| d.to_string()).collect(),
        images: Vec::new(),
        active: Some(true),
    }
}

impl ContentKind for Services {
    type Fields = Service;

    const KEY: &'static str = "services";
    const ITEM: &'static str = "service";
    const ITEMS: &'static str = "services";
    const REQUIRED: &'static [&'static str] = &["title", "shortDesc"];
    const FIELDS: &'static [&'static str] =
        &["title", "shortDesc", "icon", "color", "details", "images", "active"];

    fn seed() -> Vec<Service> {
        vec![
            service(
                "Civil Engineering",
                "Roads, drainage and structural works",
                "building",
                "#1e3a8a",
                &["Road construction", "Storm water drainage", "Structural design"],
            ),
            service(
                "Project Management",
                "Planning and supervision from start to handover",
                "clipboard",
                "#065f46",
                &["Scheduling", "Cost control", "Site supervision"],
            ),
            service(
                "Electrical Installations",
                "Power distribution for commercial and industrial sites",
                "bolt",
                "#b45309",
                &["Reticulation", "Substations", "Maintenance"],
            ),
        ]
    }
}
