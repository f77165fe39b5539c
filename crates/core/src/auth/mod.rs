//! Bearer-token checks for dashboard writes.
//!
//! Tokens are issued by the site's auth provider; this side only verifies the
//! signature and expiry and reads the role claim.

pub mod claims;
pub mod token;

pub use claims::{Claims, Role};
pub use token::{AuthError, TokenKeys};
