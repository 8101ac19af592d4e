//! wirekit basic library
//!
//! Runtime helpers shared by the wirekit tools:
//! - logging bootstrap (`timestamp [LEVEL] message` on stderr, or JSON)
//! - layered configuration (defaults, config file, `WIREKIT_` environment)

pub mod config;
pub mod logging;

pub use config::{ChecksumSection, DumpSection, LoggingSection, WireConfig};
pub use logging::LogConfig;

// Re-export common dependencies
pub use serde;
pub use serde_json;
