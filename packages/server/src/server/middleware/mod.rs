// HTTP middleware
pub mod cors;
pub mod session_auth;

pub use cors::*;
pub use session_auth::*;
