use super::{AuthError, Capability, Session};

/// Accept or reject a request for a capability.
///
/// A missing session is always `AuthenticationRequired`; a session without
/// the ADMIN role asking for an admin capability is `AdminRequired`.
pub fn authorize(session: Option<&Session>, capability: Capability) -> Result<&Session, AuthError> {
    let session = session.ok_or(AuthError::AuthenticationRequired)?;

    if capability.requires_admin() && !session.is_admin() {
        return Err(AuthError::AdminRequired);
    }

    Ok(session)
}

/// Fluent entry point for authorization checks
///
/// Usage:
/// ```rust,ignore
/// Actor::new(session.as_ref())
///     .can(Capability::ManageDocuments)
///     .check()?;
/// ```
pub struct Actor<'a> {
    session: Option<&'a Session>,
}

impl<'a> Actor<'a> {
    pub fn new(session: Option<&'a Session>) -> Self {
        Self { session }
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: Capability) -> CapabilityCheck<'a> {
        CapabilityCheck {
            session: self.session,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityCheck<'a> {
    session: Option<&'a Session>,
    capability: Capability,
}

impl<'a> CapabilityCheck<'a> {
    /// Perform the authorization check
    pub fn check(self) -> Result<&'a Session, AuthError> {
        authorize(self.session, self.capability)
    }
}
