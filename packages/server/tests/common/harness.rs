use axum::Router;
use school_core::common::ResolverContext;
use school_core::domains::auth::JwtService;
use school_core::domains::schools::models::User;
use school_core::kernel::test_dependencies::InMemoryStore;
use school_core::kernel::ServerDeps;
use school_core::server::build_app;
use school_core::server::graphql::GraphQLContext;
use school_core::server::middleware::{build_resolver_context, AuthUser};
use std::sync::Arc;
use test_context::AsyncTestContext;

use super::{seed_world, GraphQLClient, SchoolWorld, HOME_HOST};

const JWT_SECRET: &str = "test_secret_key";
const JWT_ISSUER: &str = "test_issuer";

/// Seeded in-memory store plus helpers to reach it through GraphQL or HTTP
pub struct TestHarness {
    pub store: InMemoryStore,
    pub deps: Arc<ServerDeps>,
    pub world: SchoolWorld,
    pub jwt_service: JwtService,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let store = InMemoryStore::new();
        let world = seed_world(&store);

        Self {
            deps: Arc::new(store.deps()),
            store,
            world,
            jwt_service: JwtService::new(JWT_SECRET, JWT_ISSUER.to_string()),
        }
    }

    /// Request context as the middleware would build it
    pub async fn context(&self, host: &str, user: Option<&User>) -> ResolverContext {
        let auth_user = user.map(|u| AuthUser { user_id: u.id });
        build_resolver_context(&self.deps, Some(host), auth_user.as_ref())
            .await
            .expect("Failed to build resolver context")
    }

    /// GraphQL client for `user` on the home school's host
    pub async fn graphql_as(&self, user: &User) -> GraphQLClient {
        self.graphql_on(HOME_HOST, Some(user)).await
    }

    pub async fn graphql_anonymous(&self) -> GraphQLClient {
        self.graphql_on(HOME_HOST, None).await
    }

    pub async fn graphql_on(&self, host: &str, user: Option<&User>) -> GraphQLClient {
        let context = self.context(host, user).await;
        GraphQLClient::with_context(GraphQLContext::new(self.deps.clone(), context))
    }

    /// The full router over this harness's store
    pub fn app(&self) -> Router {
        build_app(self.store.deps(), self.jwt_service.clone(), &[])
    }

    pub fn token_for(&self, user: &User) -> String {
        self.jwt_service
            .create_token(user.id)
            .expect("Failed to create token")
    }
}
