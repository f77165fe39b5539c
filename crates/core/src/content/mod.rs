//! Content types managed as ordered collections.
//!
//! Each type names its storage key, the JSON names used on the wire, the
//! fields a create request must carry, and the children a fresh parent
//! document starts with.

pub mod clients;
pub mod hero;
pub mod home_about;
pub mod milestones;
pub mod services;
pub mod team;
pub mod testimonials;
pub mod why_rayob;

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::document::ValidationError;

pub use clients::Clients;
pub use hero::Hero;
pub use home_about::HomeAbout;
pub use milestones::Milestones;
pub use services::Services;
pub use team::Team;
pub use testimonials::Testimonials;
pub use why_rayob::WhyRayob;

pub trait ContentKind: Send + Sync + 'static {
    /// Type-specific child fields, serialized camelCase next to `id` and `order`.
    type Fields: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static;

    /// Storage key and URL segment (`/api/{KEY}`).
    const KEY: &'static str;
    /// JSON name of a single child in responses.
    const ITEM: &'static str;
    /// JSON name of the child list in responses.
    const ITEMS: &'static str;
    /// Fields a create request must supply.
    const REQUIRED: &'static [&'static str];
    /// Every field a request may set. Anything else is rejected.
    const FIELDS: &'static [&'static str];

    /// Children a parent document is created with.
    fn seed() -> Vec<Self::Fields>;

    /// Checks beyond presence and type, run on create and after every update merge.
    fn validate(_fields: &Self::Fields) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Body key carrying the child id on update, e.g. `slideId`.
    fn id_field() -> String {
        format!("{}Id", Self::ITEM)
    }

    /// Body key carrying the id sequence on reorder, e.g. `slideIds`.
    fn ids_field() -> String {
        format!("{}Ids", Self::ITEM)
    }
}
