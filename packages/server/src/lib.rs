// School Administration - API Core
//
// Backend for multi-tenant schools: courses, curriculum levels and coaches,
// guarded by per-request resolver authorization and per-action policies.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
