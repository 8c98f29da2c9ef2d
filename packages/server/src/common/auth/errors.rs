use thiserror::Error;

/// Authorization failures. Both variants answer `401`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Unauthorized")]
    AuthenticationRequired,

    #[error("Unauthorized: admin access required")]
    AdminRequired,
}
