use anyhow::Result;
use axum::{
    extract::{Extension, Request},
    http::header::HOST,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use super::AuthUser;
use crate::common::{AppError, ResolverContext};
use crate::kernel::ServerDeps;
use crate::server::app::AxumAppState;

/// Resolves the school and signed-in roles for each request
///
/// Runs after `jwt_auth_middleware`. The resulting `ResolverContext` is added
/// to request extensions and never changes for the rest of the request.
pub async fn request_context_middleware(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let host = request_host(&request);
    let auth_user = request.extensions().get::<AuthUser>().cloned();

    match build_resolver_context(&state.deps, host.as_deref(), auth_user.as_ref()).await {
        Ok(context) => {
            request.extensions_mut().insert(context);
            next.run(request).await
        }
        Err(e) => {
            error!(error = %e, host = ?host, "Failed to resolve request context");
            AppError::Internal(e).into_response()
        }
    }
}

/// Host header without the port
fn request_host(request: &Request) -> Option<String> {
    let host = request.headers().get(HOST)?.to_str().ok()?;
    let host = host.split(':').next()?.trim();
    (!host.is_empty()).then(|| host.to_lowercase())
}

/// Load the actor roles for a host and (optional) token holder
///
/// A token for a user of another school yields a context with the school
/// but no user.
pub async fn build_resolver_context(
    deps: &ServerDeps,
    host: Option<&str>,
    auth_user: Option<&AuthUser>,
) -> Result<ResolverContext> {
    let school = match host {
        Some(host) => deps.schools.find_school_by_host(host).await?,
        None => None,
    };
    let Some(school) = school else {
        debug!(host = ?host, "No school for host");
        return Ok(ResolverContext::anonymous());
    };

    let user = match auth_user {
        Some(auth_user) => deps
            .schools
            .find_user(auth_user.user_id)
            .await?
            .filter(|user| user.school_id == school.id),
        None => None,
    };
    let Some(user) = user else {
        return Ok(ResolverContext::new(None, Some(school), None, None, None));
    };

    let school_admin = deps.schools.find_school_admin(user.id, school.id).await?;
    let founder = deps.schools.find_founder(user.id, school.id).await?;
    let coach = deps.faculty.find_coach_for_user(user.id, school.id).await?;

    debug!(
        user_id = %user.id,
        school_id = %school.id,
        school_admin = school_admin.is_some(),
        "Resolved request context"
    );

    Ok(ResolverContext::new(
        Some(user),
        Some(school),
        school_admin,
        founder,
        coach,
    ))
}
