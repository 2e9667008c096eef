//! Courses domain - the programs a school runs

pub mod data;
pub mod models;
pub mod resolvers;

pub use data::CourseData;
pub use models::Course;
pub use resolvers::{CoursesArgs, CoursesResolver};
