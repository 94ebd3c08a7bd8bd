//! Utility modules for sol-replace

pub mod logging;

pub use logging::{init_logging, parse_level, LoggingConfig};
