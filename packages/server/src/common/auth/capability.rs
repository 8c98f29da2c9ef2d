/// Things a caller may ask to do in the CRM.
///
/// Each capability maps to one of two requirement levels: any signed-in
/// user, or the ADMIN role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Read, update or delete configuration records
    ManageConfigurations,

    /// Update or delete documents
    ManageDocuments,

    /// List leads
    ViewLeads,

    /// Open the lead edit screen
    EditLeads,
}

impl Capability {
    /// Whether this capability needs the ADMIN role rather than just a session
    pub fn requires_admin(&self) -> bool {
        matches!(self, Capability::ManageConfigurations)
    }
}
