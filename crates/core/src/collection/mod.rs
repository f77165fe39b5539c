pub mod error;
pub mod ordering;
pub mod repository;

pub use error::CollectionError;
pub use repository::{OrderedCollection, DEFAULT_MAX_ATTEMPTS};
