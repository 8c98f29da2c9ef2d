//! Auth domain - turns signed session tokens into request identities
//!
//! Tokens are minted by the external identity provider at login with the
//! shared secret; this layer only verifies them.

pub mod jwt;
pub mod resolver;

pub use jwt::{Claims, JwtService};
pub use resolver::{JwtSessionResolver, SESSION_COOKIE};
