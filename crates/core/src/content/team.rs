use serde::{Deserialize, Serialize};

use super::ContentKind;

pub struct Team;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl ContentKind for Team {
    type Fields = TeamMember;

    const KEY: &'static str = "team";
    const ITEM: &'static str = "member";
    const ITEMS: &'static str = "members";
    const REQUIRED: &'static [&'static str] = &["name", "role"];
    const FIELDS: &'static [&'static str] =
        &["name", "role", "image", "bio", "linkedin", "active"];

    fn seed() -> Vec<TeamMember> {
        [
            ("Rabelani Obadiah", "Managing Director"),
            ("Lerato Dlamini", "Lead Civil Engineer"),
            ("Johan van Wyk", "Project Manager"),
        ]
        .into_iter()
        .map(|(name, role)| TeamMember {
            name: name.into(),
            role: role.into(),
            image: None,
            bio: None,
            linkedin: None,
            active: Some(true),
        })
        .collect()
    }
}
