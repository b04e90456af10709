//! Main workflow orchestration logic
//!
//! Runs the whole invocation against the gateway traits, so it can be driven
//! from `main` with real files and git or from tests with the mocks.

use tracing::{info, warn};

use crate::domain::{Baseline, Version};
use crate::error::{AutoVersionError, Result};
use crate::git::TagSource;
use crate::manifest::ManifestGateway;
use crate::resolver::VersionResolver;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// MAJOR.MINOR line read from the manifest
    pub baseline: Baseline,

    /// Highest existing version on that line, if any
    pub previous: Option<Version>,

    /// Version written to the manifest
    pub version: Version,

    /// The tag that was created
    pub tag: String,
}

/// Main auto-version workflow
///
/// 1. Read the manifest version and derive the baseline
/// 2. List tags on the baseline's line (an unavailable listing counts as no tags)
/// 3. Resolve the next version
/// 4. Check that the tag can be created
/// 5. Write it to the manifest
/// 6. Create the tag
///
/// Manifest and tag failures found in steps 1-4 abort before anything is
/// written.
pub fn run_auto_version<M, T>(
    manifest: &M,
    tags: &T,
    resolver: &VersionResolver,
) -> Result<WorkflowResult>
where
    M: ManifestGateway,
    T: TagSource,
{
    let declared = manifest.read_version()?;
    let baseline = VersionResolver::derive_baseline(manifest.location(), declared.as_deref())?;
    info!(%baseline, manifest = %manifest.location().display(), "baseline derived");

    let glob = resolver.pattern().glob(&baseline);
    let raw_tags = match tags.list_tags(&glob) {
        Ok(raw_tags) => raw_tags,
        // No repository or no readable tags: this is the first release on the line
        Err(AutoVersionError::TagListUnavailable(reason)) => {
            warn!(%reason, "tag listing unavailable, treating as no existing tags");
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let resolution = resolver.resolve(&baseline, &raw_tags);
    let tag = resolver.pattern().format(&resolution.version);
    info!(
        version = %resolution.version,
        previous = ?resolution.previous.map(|v| v.to_string()),
        "next version resolved"
    );

    tags.check_tag(&tag)?;
    manifest.write_version(&resolution.version.to_string())?;
    tags.create_tag(&tag)?;

    Ok(WorkflowResult {
        baseline,
        previous: resolution.previous,
        version: resolution.version,
        tag,
    })
}
