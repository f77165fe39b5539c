use serde::{Deserialize, Serialize};

use super::ContentKind;

/// Paragraphs of the homepage "about" block.
pub struct HomeAbout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub text: String,
}

impl ContentKind for HomeAbout {
    type Fields = Paragraph;

    const KEY: &'static str = "home-about";
    const ITEM: &'static str = "paragraph";
    const ITEMS: &'static str = "paragraphs";
    const REQUIRED: &'static [&'static str] = &["text"];
    const FIELDS: &'static [&'static str] = &["text"];

    fn seed() -> Vec<Paragraph> {
        vec![
            Paragraph {
                text: "Rayob Engineering is a multidisciplinary engineering and construction company."
                    .into(),
            },
            Paragraph {
                text: "We partner with public and private clients to plan, build and maintain infrastructure."
                    .into(),
            },
        ]
    }
}
