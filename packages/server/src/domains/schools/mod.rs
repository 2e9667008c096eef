//! Schools domain - tenants and the people acting inside them
//!
//! A school is resolved from the request host. Users belong to exactly one
//! school; admin, founder and coach records grant them roles there.

pub mod data;
pub mod models;
pub mod resolvers;

pub use data::SchoolData;
pub use models::{Founder, School, SchoolAdmin, User};
pub use resolvers::CurrentSchoolResolver;
