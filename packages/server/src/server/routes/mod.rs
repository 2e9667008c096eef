// HTTP routes
pub mod coaches;
pub mod error;
pub mod graphql;
pub mod health;
pub mod levels;

pub use coaches::*;
pub use graphql::*;
pub use health::*;
pub use levels::*;
