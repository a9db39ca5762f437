//! Identity Gate
//!
//! Resolves request credentials to a `(user id, role)` pair. Everything
//! downstream trusts [`CurrentUser`] and never re-derives identity.

mod extractor;
mod jwt;
mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
