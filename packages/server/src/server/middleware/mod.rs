// HTTP middleware
pub mod jwt_auth;
pub mod request_context;

pub use jwt_auth::*;
pub use request_context::*;
