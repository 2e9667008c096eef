// Business domains
pub mod auth;
pub mod coaches;
pub mod courses;
pub mod levels;
pub mod schools;
