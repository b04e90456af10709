use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::info;

use crate::error::{AutoVersionError, Result};
use crate::manifest::ManifestGateway;

const VERSION_FIELD: &str = "version";

/// JSON manifest on disk (e.g. `package.json`)
///
/// Writes are pretty-printed with two-space indentation. Key order is kept
/// through serde_json's `preserve_order` feature.
pub struct JsonManifest {
    path: PathBuf,
}

impl JsonManifest {
    /// Manifest at `path`; nothing is read until the first call
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonManifest { path: path.into() }
    }

    fn load(&self) -> Result<(Value, String)> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| AutoVersionError::manifest_not_found(&self.path, e))?;
        let document = serde_json::from_str(&raw)
            .map_err(|e| AutoVersionError::manifest_not_found(&self.path, e))?;
        Ok((document, raw))
    }
}

impl ManifestGateway for JsonManifest {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read_version(&self) -> Result<Option<String>> {
        let (document, _) = self.load()?;
        Ok(document
            .get(VERSION_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn write_version(&self, version: &str) -> Result<()> {
        let (mut document, raw) = self.load()?;

        let fields: &mut Map<String, Value> = document.as_object_mut().ok_or_else(|| {
            AutoVersionError::manifest_not_found(&self.path, "top-level value is not an object")
        })?;
        fields.insert(VERSION_FIELD.to_string(), Value::String(version.to_string()));

        let mut serialized = serde_json::to_string_pretty(&document)?;
        if raw.ends_with('\n') {
            serialized.push('\n');
        }
        fs::write(&self.path, serialized)?;

        info!(path = %self.path.display(), version, "manifest updated");
        Ok(())
    }
}
