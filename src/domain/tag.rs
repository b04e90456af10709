use crate::domain::{Baseline, Version};
use crate::error::{AutoVersionError, Result};

/// Characters that would change the meaning of the listing glob
const GLOB_METACHARACTERS: &[char] = &['*', '?', '[', ']'];

/// Literal prefix put in front of a version to form a tag name (e.g. "v")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    prefix: String,
}

impl TagPattern {
    /// Create a new tag pattern, rejecting prefixes with glob metacharacters
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.contains(GLOB_METACHARACTERS) {
            return Err(AutoVersionError::tag(format!(
                "Tag prefix '{}' must not contain any of * ? [ ]",
                prefix
            )));
        }
        Ok(TagPattern { prefix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Example: prefix="v", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        format!("{}{}", self.prefix, version)
    }

    /// Version text of a tag, or `None` when the prefix is absent
    pub fn strip<'a>(&self, tag: &'a str) -> Option<&'a str> {
        tag.strip_prefix(self.prefix.as_str())
    }

    /// fnmatch pattern listing every tag on a line: "v1.2.*"
    ///
    /// The trailing dot keeps `v1.2.*` from matching `v1.20.0`.
    pub fn glob(&self, baseline: &Baseline) -> String {
        format!("{}{}.*", self.prefix, baseline)
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern {
            prefix: "v".to_string(),
        }
    }
}
