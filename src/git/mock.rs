use crate::error::{AutoVersionError, Result};
use crate::git::TagSource;
use regex::Regex;
use std::cell::RefCell;

/// Mock tag source for testing without actual git operations
pub struct MockTagSource {
    tags: RefCell<Vec<String>>,
    created: RefCell<Vec<String>>,
    listing_fails: bool,
    head_missing: bool,
}

impl MockTagSource {
    /// Create a new mock with no tags
    pub fn new() -> Self {
        MockTagSource {
            tags: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
            listing_fails: false,
            head_missing: false,
        }
    }

    /// Create a mock pre-populated with `tags`
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let source = Self::new();
        source
            .tags
            .borrow_mut()
            .extend(tags.into_iter().map(Into::into));
        source
    }

    /// Create a mock whose listing always fails, like a directory outside any repository
    pub fn unavailable() -> Self {
        MockTagSource {
            listing_fails: true,
            ..Self::new()
        }
    }

    /// Create a mock whose HEAD has no commit, so no tag can be created
    pub fn without_head() -> Self {
        MockTagSource {
            head_missing: true,
            ..Self::new()
        }
    }

    /// Tags created through [TagSource::create_tag], oldest first
    pub fn created(&self) -> Vec<String> {
        self.created.borrow().clone()
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate an fnmatch-style glob (`*` and `?` only) into an anchored regex
fn glob_to_regex(pattern: &str) -> Result<Regex> {
    let escaped = regex::escape(pattern)
        .replace(r"\*", ".*")
        .replace(r"\?", ".");
    Regex::new(&format!("^{}$", escaped))
        .map_err(|e| AutoVersionError::tag_list_unavailable(format!("Invalid pattern: {}", e)))
}

impl TagSource for MockTagSource {
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        if self.listing_fails {
            return Err(AutoVersionError::tag_list_unavailable(
                "mock tag source is unavailable",
            ));
        }

        let re = glob_to_regex(pattern)?;
        Ok(self
            .tags
            .borrow()
            .iter()
            .filter(|tag| re.is_match(tag))
            .cloned()
            .collect())
    }

    fn check_tag(&self, name: &str) -> Result<()> {
        if self.head_missing {
            return Err(AutoVersionError::tag("Cannot resolve HEAD commit: unborn branch"));
        }
        if self.tags.borrow().iter().any(|tag| tag == name) {
            return Err(AutoVersionError::tag(format!(
                "Cannot create tag '{}': tag already exists",
                name
            )));
        }
        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.check_tag(name)?;
        self.tags.borrow_mut().push(name.to_string());
        self.created.borrow_mut().push(name.to_string());
        Ok(())
    }
}
