use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ContentKind;

/// Company history timeline.
pub struct Milestones;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Free-form label such as `2008` or `Q3 2021`; numbers are accepted and kept as text.
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "year must be a string or number, got {other}"
        ))),
    }
}

impl ContentKind for Milestones {
    type Fields = Milestone;

    const KEY: &'static str = "milestones";
    const ITEM: &'static str = "milestone";
    const ITEMS: &'static str = "milestones";
    const REQUIRED: &'static [&'static str] = &["year", "title"];
    const FIELDS: &'static [&'static str] = &["year", "title", "description"];

    fn seed() -> Vec<Milestone> {
        [
            ("2008", "Founded", "Started as a two-person civil engineering consultancy."),
            ("2014", "First major contract", "Awarded a provincial road rehabilitation project."),
            ("2020", "Expanded services", "Added electrical and project management divisions."),
        ]
        .into_iter()
        .map(|(year, title, description)| Milestone {
            year: year.into(),
            title: title.into(),
            description: description.into(),
        })
        .collect()
    }
}
