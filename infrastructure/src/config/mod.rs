//! Configuration loading and conversion to domain types.

pub mod file_config;
pub mod loader;

pub use file_config::{ConfigError, DebateSetup, FileConfig};
pub use loader::ConfigLoader;
