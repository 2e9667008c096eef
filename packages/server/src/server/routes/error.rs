//! HTTP mapping of `AppError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::common::{AppError, AuthError};

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(AuthError::Unauthorized) => StatusCode::FORBIDDEN,
            AppError::Auth(AuthError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            AppError::Auth(AuthError::InvalidToken) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let body = match &self {
            AppError::Validation(errors) => json!({
                "error": { "code": code, "message": self.to_string(), "errors": errors },
            }),
            AppError::Internal(e) => {
                error!(error = %e, "Request failed");
                json!({ "error": { "code": code, "message": "Internal server error" } })
            }
            _ => json!({ "error": { "code": code, "message": self.to_string() } }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ValidationErrors;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::from(AuthError::Unauthorized).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::from(AuthError::InvalidArgument("x".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(AuthError::InvalidToken).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(ValidationErrors::new()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::NotFound("Course").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    async fn body_of(error: AppError) -> serde_json::Value {
        let response = error.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_internal_error_detail_is_hidden() {
        let body = body_of(AppError::Internal(anyhow::anyhow!("password=hunter2"))).await;
        assert_eq!(body["error"]["code"], "INTERNAL");
        assert_eq!(body["error"]["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_validation_body_lists_attribute_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "does not look like an email address");

        let body = body_of(errors.into()).await;
        assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
        assert_eq!(
            body["error"]["errors"]["email"][0],
            "does not look like an email address"
        );
    }
}
