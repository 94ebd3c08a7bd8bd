//! FileSystem abstraction for testable file operations

#[cfg(test)]
mod mock;
mod real;
mod r#trait;

#[cfg(test)]
pub use mock::MockFileSystem;
pub use r#trait::FileSystem;
pub use real::RealFileSystem;
