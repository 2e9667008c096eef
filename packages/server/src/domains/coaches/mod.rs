//! Coaches domain - faculty members of a school and their course enrollments

pub mod actions;
pub mod data;
pub mod models;
pub mod policy;
pub mod resolvers;

pub use actions::{create_coach, remove_coach};
pub use data::{CoachData, CoachInput};
pub use models::{Coach, NewCoach};
pub use policy::CoachPolicy;
pub use resolvers::{CoachesArgs, CoachesResolver};
