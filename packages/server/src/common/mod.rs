// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod error;
pub mod id;
pub mod validation;

pub use auth::{Actor, AuthError, Authorized, Policy, Resolve, Resolver, ResolverContext};
pub use entity_ids::{CoachId, CourseId, FounderId, LevelId, SchoolAdminId, SchoolId, UserId};
pub use error::AppError;
pub use id::Id;
pub use validation::{AttributeValidator, Validate, ValidationErrors};
