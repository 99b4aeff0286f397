//! Infrastructure layer for agent-debate
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod diagram;
pub mod logging;
pub mod topic;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, DebateSetup, FileConfig};
pub use diagram::DotDiagramRenderer;
pub use logging::JsonlEventSink;
pub use topic::StdinTopicSource;
