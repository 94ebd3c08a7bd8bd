//! Batch rewrite of `.sol` sources
//!
//! - [`walker`]: lazy recursive traversal of one root
//! - [`filter`]: which entries get rewritten
//! - [`transform`]: the text pass itself
//! - [`driver`]: read-transform-write over the fixed roots

pub mod driver;
pub mod error;
pub mod filter;
pub mod transform;
pub mod walker;

pub use driver::{RewriteSummary, Rewriter, DEFAULT_ROOTS};
pub use error::RewriteError;
pub use filter::{is_eligible, matches_extension, EXTENSION};
pub use transform::{added_bytes, transform};
pub use walker::{walk, EntryKind, Walk, WalkEntry};
