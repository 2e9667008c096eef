//! Auth domain - bearer token issue and verification
//!
//! Users sign in elsewhere and receive a signed token; every request carries
//! it and the JWT middleware turns it back into an `AuthUser`.

pub mod jwt;

pub use jwt::{Claims, JwtService};
