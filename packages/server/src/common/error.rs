use thiserror::Error;

use super::auth::AuthError;
use super::validation::ValidationErrors;

/// Failure of a resolver or action, classified for the HTTP/GraphQL boundary.
///
/// Authorization failures abort immediately; validation failures carry every
/// accumulated attribute error at once.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Validation failed: {}", .0.full_messages().join(", "))]
    Validation(ValidationErrors),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl AppError {
    /// Stable machine-readable code used in GraphQL extensions and REST bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Auth(AuthError::Unauthorized) => "UNAUTHORIZED",
            AppError::Auth(AuthError::InvalidArgument(_)) => "INVALID_ARGUMENT",
            AppError::Auth(AuthError::InvalidToken) => "INVALID_TOKEN",
            AppError::Validation(_) => "VALIDATION_FAILED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Internal(_) => "INTERNAL",
        }
    }
}
