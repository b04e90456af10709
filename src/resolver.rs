use std::path::Path;

use tracing::debug;

use crate::domain::{Baseline, TagPattern, Version};
use crate::error::{AutoVersionError, Result};

/// Outcome of resolving the next version for a baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The version to write and tag
    pub version: Version,
    /// Highest existing version on the same line, if any
    pub previous: Option<Version>,
}

/// Picks the next unused patch version for a MAJOR.MINOR line.
///
/// Everything here is pure: tag names come in as plain strings and nothing
/// touches git or the filesystem.
#[derive(Debug, Clone, Default)]
pub struct VersionResolver {
    pattern: TagPattern,
}

impl VersionResolver {
    /// Create a new resolver for tags formatted with `pattern`
    pub fn new(pattern: TagPattern) -> Self {
        VersionResolver { pattern }
    }

    pub fn pattern(&self) -> &TagPattern {
        &self.pattern
    }

    /// Derive the MAJOR.MINOR baseline from the manifest's version text.
    ///
    /// Fails with `InvalidManifestVersion` when the text is missing or is not a
    /// strict `MAJOR.MINOR.PATCH` version. `manifest` only names the file in
    /// the error.
    pub fn derive_baseline(manifest: &Path, version_text: Option<&str>) -> Result<Baseline> {
        let text = version_text
            .ok_or_else(|| AutoVersionError::invalid_manifest_version(manifest, None))?;

        match Version::parse(text) {
            Ok(version) => Ok(version.baseline()),
            Err(e) => {
                debug!(error = %e, "manifest version rejected");
                Err(AutoVersionError::invalid_manifest_version(
                    manifest,
                    Some(text),
                ))
            }
        }
    }

    /// Keep the tags that parse as versions on `baseline`.
    ///
    /// Unprefixed, unparsable and off-line tags are dropped, never reported as
    /// errors. Order of the result follows `raw_tags`.
    pub fn filter_candidates(&self, raw_tags: &[String], baseline: &Baseline) -> Vec<Version> {
        raw_tags
            .iter()
            .filter_map(|tag| {
                let Some(text) = self.pattern.strip(tag) else {
                    debug!(tag = %tag, "skipping tag without prefix");
                    return None;
                };

                match Version::parse(text) {
                    Ok(version) if baseline.contains(&version) => Some(version),
                    Ok(_) => {
                        debug!(tag = %tag, %baseline, "skipping tag from another line");
                        None
                    }
                    Err(e) => {
                        debug!(tag = %tag, error = %e, "skipping unparsable tag");
                        None
                    }
                }
            })
            .collect()
    }

    /// Next version after `candidates`, or `MAJOR.MINOR.0` when there are none.
    ///
    /// The maximum is taken by version ordering, so sparse or unsorted tag
    /// lists still advance past the highest patch.
    pub fn resolve_next_version(baseline: &Baseline, candidates: &[Version]) -> Version {
        match candidates.iter().max() {
            Some(highest) => highest.next_patch(),
            None => baseline.first_release(),
        }
    }

    /// Filter `raw_tags` and resolve the next version in one step
    pub fn resolve(&self, baseline: &Baseline, raw_tags: &[String]) -> Resolution {
        let candidates = self.filter_candidates(raw_tags, baseline);
        Resolution {
            version: Self::resolve_next_version(baseline, &candidates),
            previous: candidates.iter().max().copied(),
        }
    }
}
