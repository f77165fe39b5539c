/// Child item identifiers.
///
/// New ids are UUID v7 in simple (hyphen-less) form, so they sort by creation
/// time and are never handed out twice. Ids coming back from clients are only
/// checked for shape; whether they exist is the repository's concern.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

const MAX_ID_LEN: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemIdError {
    #[error("item id cannot be empty")]
    Empty,
    #[error("item id is longer than 64 characters")]
    TooLong,
    #[error("item id contains invalid character {0:?}")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Mint a fresh id.
    pub fn generate() -> Self {
        ItemId(Uuid::now_v7().simple().to_string())
    }

    /// Parse a client-supplied id.
    pub fn parse(id: &str) -> Result<Self, ItemIdError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ItemIdError::Empty);
        }
        if id.len() > MAX_ID_LEN {
            return Err(ItemIdError::TooLong);
        }
        if let Some(c) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ItemIdError::InvalidChar(c));
        }
        Ok(ItemId(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
