pub mod level;

pub use level::{Level, NewLevel};
