use crate::error::{AutoVersionError, Result};
use crate::manifest::ManifestGateway;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// In-memory manifest for testing without touching the filesystem
pub struct MockManifest {
    path: PathBuf,
    present: bool,
    version: RefCell<Option<String>>,
    writes: RefCell<Vec<String>>,
}

impl MockManifest {
    /// A manifest declaring `version`
    pub fn with_version(version: impl Into<String>) -> Self {
        MockManifest {
            path: PathBuf::from("package.json"),
            present: true,
            version: RefCell::new(Some(version.into())),
            writes: RefCell::new(Vec::new()),
        }
    }

    /// A manifest that loads but has no version field
    pub fn without_version() -> Self {
        MockManifest {
            version: RefCell::new(None),
            ..Self::with_version("")
        }
    }

    /// A manifest that does not exist
    pub fn missing() -> Self {
        MockManifest {
            present: false,
            ..Self::without_version()
        }
    }

    /// Every version written so far, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl ManifestGateway for MockManifest {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read_version(&self) -> Result<Option<String>> {
        if !self.present {
            return Err(AutoVersionError::manifest_not_found(
                &self.path,
                "No such file or directory",
            ));
        }
        Ok(self.version.borrow().clone())
    }

    fn write_version(&self, version: &str) -> Result<()> {
        if !self.present {
            return Err(AutoVersionError::manifest_not_found(
                &self.path,
                "No such file or directory",
            ));
        }
        *self.version.borrow_mut() = Some(version.to_string());
        self.writes.borrow_mut().push(version.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_manifest_roundtrip() {
        let manifest = MockManifest::with_version("1.0.0");
        assert_eq!(manifest.read_version().unwrap(), Some("1.0.0".to_string()));

        manifest.write_version("1.0.1").unwrap();

        assert_eq!(manifest.read_version().unwrap(), Some("1.0.1".to_string()));
        assert_eq!(manifest.writes(), vec!["1.0.1".to_string()]);
    }

    #[test]
    fn test_mock_manifest_without_version() {
        let manifest = MockManifest::without_version();
        assert_eq!(manifest.read_version().unwrap(), None);
    }

    #[test]
    fn test_mock_manifest_missing() {
        let manifest = MockManifest::missing();
        assert!(matches!(
            manifest.read_version(),
            Err(AutoVersionError::ManifestNotFound { .. })
        ));
        assert!(manifest.write_version("1.0.0").is_err());
        assert!(manifest.writes().is_empty());
    }
}
