/// Authorization for CRM handlers
///
/// Every mutating handler starts with a gate check before touching the store:
///
/// ```rust,ignore
/// use crate::common::auth::{Actor, Capability};
///
/// let session = Actor::new(session.as_ref())
///     .can(Capability::ManageConfigurations)
///     .check()?;
/// ```

mod capability;
mod errors;
mod gate;
mod session;

pub use capability::Capability;
pub use errors::AuthError;
pub use gate::{authorize, Actor, CapabilityCheck};
pub use session::Session;
