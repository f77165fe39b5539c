pub mod id;
pub mod model;
pub mod validate;

pub use id::{ItemId, ItemIdError};
pub use model::Item;
pub use validate::ValidationError;
