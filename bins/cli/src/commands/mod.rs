//! CLI command handlers.

pub mod config;
pub mod demo;
pub mod emit;
pub mod resolve;

pub use config::{run_config_schema, run_config_show};
pub use demo::run_demo;
pub use emit::run_emit;
pub use resolve::run_resolve;
