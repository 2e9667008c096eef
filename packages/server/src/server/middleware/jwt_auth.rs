use crate::common::{AppError, AuthError, UserId};
use crate::domains::auth::JwtService;
use axum::{
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Authenticated user information from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: UserId,
}

/// JWT authentication middleware
///
/// Extracts JWT token from Authorization header, verifies it, and adds AuthUser to request extensions.
/// Without an Authorization header the request continues anonymously; a header that fails
/// verification is rejected with 401.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    match extract_auth_user(&request, &jwt_service) {
        Ok(Some(user)) => {
            debug!(user_id = %user.user_id, "Authenticated user");
            request.extensions_mut().insert(user);
        }
        Ok(None) => debug!("No authentication token"),
        Err(e) => {
            warn!(path = %request.uri().path(), "Rejected invalid authentication token");
            return AppError::from(e).into_response();
        }
    }

    next.run(request).await
}

/// Extract and verify JWT token from request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Result<Option<AuthUser>, AuthError> {
    let Some(auth_header) = request.headers().get("authorization") else {
        return Ok(None);
    };
    let auth_str = auth_header.to_str().map_err(|_| AuthError::InvalidToken)?;

    // Handle both "Bearer <token>" and raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let claims = jwt_service
        .verify_token(token)
        .map_err(|_| AuthError::InvalidToken)?;

    Ok(Some(AuthUser {
        user_id: claims.user_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test_secret", "test_issuer".to_string())
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt_service = service();
        let user_id = UserId::new();
        let token = jwt_service.create_token(user_id).unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt_service).unwrap();
        assert_eq!(auth_user.unwrap().user_id, user_id);
    }

    #[test]
    fn test_extract_token_without_bearer() {
        let jwt_service = service();
        let user_id = UserId::new();
        let token = jwt_service.create_token(user_id).unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", token)
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt_service).unwrap();
        assert_eq!(auth_user.unwrap().user_id, user_id);
    }

    #[test]
    fn test_no_auth_header() {
        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_auth_user(&request, &service()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_token() {
        let request = axum::http::Request::builder()
            .header("authorization", "Bearer invalid_token")
            .body(axum::body::Body::empty())
            .unwrap();

        assert_eq!(
            extract_auth_user(&request, &service()).unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn test_token_from_other_issuer_is_rejected() {
        let other = JwtService::new("test_secret", "someone_else".to_string());
        let token = other.create_token(UserId::new()).unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        assert_eq!(
            extract_auth_user(&request, &service()).unwrap_err(),
            AuthError::InvalidToken
        );
    }
}
