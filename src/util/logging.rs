//! Structured logging setup for sol-replace
//!
//! Logs go to stderr through the `tracing` ecosystem so that stdout stays
//! free. The subscriber can only be installed once per process.
//!
//! # Environment Variables
//!
//! - `SOL_REPLACE_LOG_LEVEL` - Log level (trace, debug, info, warn, error)
//! - `SOL_REPLACE_LOG_JSON` - Emit JSON lines instead of pretty output (true/false)
//! - `RUST_LOG` - Standard filter; when set it replaces the default directives
//!
//! # Example
//!
//! ```no_run
//! use sol_replace::util::{init_logging, LoggingConfig};
//!
//! init_logging(LoggingConfig::from_env());
//! tracing::info!(root = "src", "Scanning root");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

pub const LOG_LEVEL_ENV: &str = "SOL_REPLACE_LOG_LEVEL";
pub const LOG_JSON_ENV: &str = "SOL_REPLACE_LOG_JSON";

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level for this crate
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
        }
    }
}

impl LoggingConfig {
    /// Reads `SOL_REPLACE_LOG_LEVEL` and `SOL_REPLACE_LOG_JSON`, falling back
    /// to the defaults for anything unset
    pub fn from_env() -> Self {
        let level = env::var(LOG_LEVEL_ENV)
            .map(|s| parse_level(&s))
            .unwrap_or(Level::INFO);

        let use_json = env::var(LOG_JSON_ENV)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self { level, use_json }
    }
}

/// Parses a log level from a string
///
/// Case-insensitive; unknown values fall back to `INFO` with a warning on
/// stderr.
///
/// ```
/// use sol_replace::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Directives applied when `RUST_LOG` is not set
fn default_directives(level: Level) -> Vec<String> {
    vec![format!("sol_replace={}", level), "ignore=warn".to_string()]
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env();

    if env::var("RUST_LOG").is_err() {
        for directive in default_directives(config.level) {
            match directive.parse() {
                Ok(parsed) => filter = filter.add_directive(parsed),
                Err(e) => eprintln!("Ignoring log directive '{}': {}", directive, e),
            }
        }
    }

    filter
}

/// Installs the global subscriber; later calls are no-ops
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(&config);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .init();
        }
    });
}
