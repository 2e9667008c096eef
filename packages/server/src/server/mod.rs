// HTTP server setup (Axum + GraphQL + REST)
pub mod app;
pub mod args;
pub mod graphql;
pub mod middleware;
pub mod routes;

pub use app::*;
pub use graphql::*;
