use serde::{Deserialize, Serialize};

use super::ContentKind;

/// Client logo strip.
pub struct Clients;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub name: String,
    pub logo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl ContentKind for Clients {
    type Fields = Client;

    const KEY: &'static str = "clients";
    const ITEM: &'static str = "client";
    const ITEMS: &'static str = "clients";
    const REQUIRED: &'static [&'static str] = &["name", "logo"];
    const FIELDS: &'static [&'static str] = &["name", "logo", "website", "active"];

    fn seed() -> Vec<Client> {
        ["Department of Public Works", "City Power", "Transnet"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| Client {
                name: name.into(),
                logo: format!("/images/clients/client-{}.png", i + 1),
                website: None,
                active: Some(true),
            })
            .collect()
    }
}
