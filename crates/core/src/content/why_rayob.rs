use serde::{Deserialize, Serialize};

use super::ContentKind;

/// "Why choose us" reasons.
pub struct WhyRayob;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reason {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ContentKind for WhyRayob {
    type Fields = Reason;

    const KEY: &'static str = "why-rayob";
    const ITEM: &'static str = "reason";
    const ITEMS: &'static str = "reasons";
    const REQUIRED: &'static [&'static str] = &["title", "description"];
    const FIELDS: &'static [&'static str] = &["title", "description", "icon"];

    fn seed() -> Vec<Reason> {
        [
            ("Experienced Team", "Registered professionals with years of field work.", "users"),
            ("Quality Assurance", "Every project follows documented QA procedures.", "shield"),
            ("On-time Delivery", "Realistic schedules that we keep.", "clock"),
        ]
        .into_iter()
        .map(|(title, description, icon)| Reason {
            title: title.into(),
            description: description.into(),
            icon: Some(icon.into()),
        })
        .collect()
    }
}
