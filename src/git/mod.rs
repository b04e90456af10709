//! Tag operations abstraction layer
//!
//! This module provides a trait-based abstraction over the tag namespace of
//! a version-control system, so version resolution never has to spawn a
//! process or open a repository to be tested.
//!
//! # Overview
//!
//! The [TagSource] trait covers the operations auto-version needs. The
//! concrete implementations are:
//!
//! - [repository::Git2TagSource]: a real implementation using the `git2` crate
//! - [mock::MockTagSource]: an in-memory implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use auto_version::git::TagSource;
//! # fn example<T: TagSource>(tags: &T) -> Result<(), Box<dyn std::error::Error>> {
//! let existing = tags.list_tags("v1.2.*")?;
//! if !existing.contains(&"v1.2.0".to_string()) {
//!     tags.check_tag("v1.2.0")?;
//!     tags.create_tag("v1.2.0")?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::Git2TagSource;

use crate::error::Result;

/// Listing and creation of tags
///
/// ## Error Handling
///
/// `list_tags` reports any enumeration problem as
/// [crate::error::AutoVersionError::TagListUnavailable]; callers decide whether
/// that is fatal. `check_tag` and `create_tag` map failures to
/// [crate::error::AutoVersionError::Tag] or `Git`.
pub trait TagSource {
    /// Get the tag names matching an fnmatch-style `pattern` (e.g. "v1.2.*")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Matching tag names, possibly empty
    /// * `Err(TagListUnavailable)` - If the tags cannot be enumerated at all
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>>;

    /// Check that `create_tag(name)` would succeed, without creating anything
    ///
    /// # Returns
    /// * `Ok(())` - The repository exists, HEAD has a commit and `name` is free
    /// * `Err` - The error `create_tag` would have returned
    fn check_tag(&self, name: &str) -> Result<()>;

    /// Create a lightweight tag at the current HEAD
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, HEAD has no commit, or a git error occurs
    fn create_tag(&self, name: &str) -> Result<()>;
}
