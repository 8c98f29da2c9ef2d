use serde::{Deserialize, Serialize};

use crate::common::UserId;
use crate::domains::users::Role;

/// Identity resolved for the current request.
///
/// Rebuilt from the signed token on every request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: UserId,
    pub role: Role,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl Session {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self {
            user_id,
            role,
            name: None,
            avatar: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
