use crate::error::{AutoVersionError, Result};
use crate::git::TagSource;
use git2::{Commit, ErrorCode, Repository};
use std::path::PathBuf;
use tracing::{debug, info};

/// Tag source backed by libgit2
///
/// The repository is discovered from `path` on every call, so a directory
/// outside any repository only fails when tags are actually needed.
pub struct Git2TagSource {
    path: PathBuf,
}

impl Git2TagSource {
    /// Tag source for the repository containing `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Git2TagSource { path: path.into() }
    }

    fn open(&self) -> std::result::Result<Repository, git2::Error> {
        Repository::discover(&self.path)
    }
}

fn head_commit(repo: &Repository) -> Result<Commit<'_>> {
    repo.head()
        .and_then(|head| head.peel_to_commit())
        .map_err(|e| AutoVersionError::tag(format!("Cannot resolve HEAD commit: {}", e)))
}

impl TagSource for Git2TagSource {
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        let repo = self.open().map_err(|e| {
            AutoVersionError::tag_list_unavailable(format!(
                "Not in a git repository ({}): {}",
                self.path.display(),
                e
            ))
        })?;

        let tags = repo.tag_names(Some(pattern)).map_err(|e| {
            AutoVersionError::tag_list_unavailable(format!("Cannot list tags: {}", e))
        })?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn check_tag(&self, name: &str) -> Result<()> {
        let repo = self.open()?;
        let head = head_commit(&repo)?;

        let result = match repo.find_reference(&format!("refs/tags/{}", name)) {
            Ok(_) => Err(AutoVersionError::tag(format!(
                "Cannot create tag '{}': tag already exists",
                name
            ))),
            Err(e) if e.code() == ErrorCode::NotFound => {
                debug!(tag = name, commit = %head.id(), "tag can be created");
                Ok(())
            }
            Err(e) => Err(e.into()),
        };
        result
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let repo = self.open()?;
        let head = head_commit(&repo)?;

        repo.tag_lightweight(name, head.as_object(), false)
            .map_err(|e| AutoVersionError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        info!(tag = name, commit = %head.id(), "tag created");
        Ok(())
    }
}
