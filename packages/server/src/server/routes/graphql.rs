//! GraphQL endpoints. Each request runs against a `GraphQLContext` built from
//! the tenant context the middleware resolved.

use crate::common::ResolverContext;
use crate::server::app::AxumAppState;
use crate::server::graphql::{GraphQLContext, Schema};
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use juniper::http::{graphiql::graphiql_source, GraphQLBatchRequest, GraphQLRequest};
use serde::Serialize;
use std::sync::Arc;

const GRAPHQL_PATH: &str = "/graphql";

fn respond<T: Serialize>(ok: bool, body: T) -> Response {
    let status = if ok {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(body)).into_response()
}

/// POST /graphql
pub async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Extension(state): Extension<AxumAppState>,
    Extension(resolver_context): Extension<ResolverContext>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    let context = GraphQLContext::new(state.deps.clone(), resolver_context);
    let response = request.execute(&schema, &context).await;
    respond(response.is_ok(), response)
}

/// POST /graphql/batch
pub async fn graphql_batch_handler(
    State(schema): State<Arc<Schema>>,
    Extension(state): Extension<AxumAppState>,
    Extension(resolver_context): Extension<ResolverContext>,
    Json(batch): Json<GraphQLBatchRequest>,
) -> Response {
    let context = GraphQLContext::new(state.deps.clone(), resolver_context);
    let response = batch.execute(&schema, &context).await;
    respond(response.is_ok(), response)
}

/// GraphiQL pointed at this server's endpoint (debug builds only)
pub async fn graphql_playground() -> Html<String> {
    Html(graphiql_source(GRAPHQL_PATH, None))
}
