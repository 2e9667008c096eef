//! Levels domain - the ordered stages of a course's curriculum
//!
//! Reads go through `LevelsResolver`; writes go through the actions, each
//! gated by `LevelPolicy`.

pub mod actions;
pub mod data;
pub mod models;
pub mod policy;
pub mod resolvers;

pub use actions::{create_level, destroy_level, update_level};
pub use data::{LevelData, LevelInput, LevelInputData};
pub use models::{Level, NewLevel};
pub use policy::LevelPolicy;
pub use resolvers::{LevelsArgs, LevelsResolver};
