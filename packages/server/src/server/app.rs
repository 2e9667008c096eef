//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::kernel::ServerDeps;
use crate::server::graphql::create_schema;
use crate::server::middleware::{jwt_auth_middleware, request_context_middleware};
use crate::server::routes::{
    create_coach_handler, create_level_handler, course_coaches_handler, curriculum_handler,
    destroy_level_handler, graphql_batch_handler, graphql_handler, health_handler,
    remove_coach_handler, update_level_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, jwt_service: JwtService, allowed_origins: &[String]) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let jwt_service = Arc::new(jwt_service);
    let app_state = AxumAppState {
        deps: Arc::new(deps),
    };

    let mut router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(crate::server::routes::graphql_playground));
    }

    router
        .route("/school/courses/:course_id/curriculum", get(curriculum_handler))
        .route("/school/courses/:course_id/levels", post(create_level_handler))
        .route(
            "/school/levels/:id",
            patch(update_level_handler).delete(destroy_level_handler),
        )
        .route(
            "/school/courses/:course_id/coaches",
            get(course_coaches_handler).post(create_coach_handler),
        )
        .route(
            "/school/courses/:course_id/coaches/:id",
            delete(remove_coach_handler),
        )
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(request_context_middleware))
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        // Health check skips tenant resolution
        .route("/health", get(health_handler))
        .layer(Extension(app_state)) // Must wrap every middleware that reads it
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        // State (schema for GraphQL handlers)
        .with_state(schema)
}
