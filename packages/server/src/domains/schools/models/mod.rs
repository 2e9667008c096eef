pub mod founder;
pub mod school;
pub mod school_admin;
pub mod user;

pub use founder::Founder;
pub use school::School;
pub use school_admin::SchoolAdmin;
pub use user::User;
