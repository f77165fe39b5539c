pub mod auth;
pub mod collection;
pub mod content;
pub mod document;
pub mod events;
pub mod store;
