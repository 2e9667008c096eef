pub mod coach;

pub use coach::{Coach, NewCoach};
