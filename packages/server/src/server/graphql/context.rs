use std::sync::Arc;

use crate::common::ResolverContext;
use crate::kernel::ServerDeps;

/// GraphQL request context
///
/// Shared dependencies plus the per-request actor context.
#[derive(Clone)]
pub struct GraphQLContext {
    pub deps: Arc<ServerDeps>,
    pub resolver_context: ResolverContext,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: Arc<ServerDeps>, resolver_context: ResolverContext) -> Self {
        Self {
            deps,
            resolver_context,
        }
    }

    pub fn deps(&self) -> &ServerDeps {
        &self.deps
    }

    /// Cloned for each resolver so it can own its context
    pub fn resolver_context(&self) -> ResolverContext {
        self.resolver_context.clone()
    }
}
