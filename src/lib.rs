//! sol-replace - spaces out the line feeds of Solidity sources
//!
//! Walks `test/` and then `src/`, and rewrites every file whose name ends in
//! `.sol` (any case) so that each line feed is preceded by one space. The
//! rewrite is literal and is applied in place.
//!
//! # Example
//!
//! ```no_run
//! use sol_replace::{RealFileSystem, Rewriter};
//!
//! let summary = Rewriter::in_current_dir(RealFileSystem::new()).run()?;
//! println!("rewrote {} files", summary.files_rewritten);
//! # Ok::<(), sol_replace::RewriteError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`rewrite`]: traversal, filtering, the text pass and the driver
//! - [`fs`]: file access seam used by the driver
//! - [`cli`]: command-line arguments
//! - [`util`]: logging setup

pub mod cli;
pub mod fs;
pub mod rewrite;
pub mod util;

pub use fs::{FileSystem, RealFileSystem};
pub use rewrite::{transform, RewriteError, RewriteSummary, Rewriter, DEFAULT_ROOTS};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
