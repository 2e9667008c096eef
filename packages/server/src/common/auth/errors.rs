use thiserror::Error;

/// Authorization errors raised at the resolver and policy seams
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The authorization predicate rejected the operation.
    #[error("Unauthorized")]
    Unauthorized,

    /// Operation arguments did not match the resolver's declared fields.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid or expired token")]
    InvalidToken,
}
