//! Manifest access abstraction
//!
//! The [ManifestGateway] trait reads and writes the declared version of a
//! project descriptor. Implementations:
//!
//! - [json::JsonManifest]: a `package.json`-style file on disk
//! - [mock::MockManifest]: an in-memory manifest for testing

pub mod json;
pub mod mock;

pub use json::JsonManifest;
pub use mock::MockManifest;

use crate::error::Result;
use std::path::Path;

/// Read/write access to the `version` field of a project manifest
pub trait ManifestGateway {
    /// Location of the manifest, used in error messages
    fn location(&self) -> &Path;

    /// Read the declared version.
    ///
    /// # Returns
    /// * `Ok(Some(text))` - The raw version text
    /// * `Ok(None)` - The manifest loaded but has no string `version` field
    /// * `Err(ManifestNotFound)` - The manifest is absent or not structured data
    fn read_version(&self) -> Result<Option<String>>;

    /// Overwrite the `version` field, leaving every other field untouched
    fn write_version(&self, version: &str) -> Result<()>;
}
