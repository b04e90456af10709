use crate::error::{AutoVersionError, Result};
use std::fmt;
use std::str::FromStr;

/// Strict three-component semantic version
///
/// Field order gives the standard ordering: major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse `MAJOR.MINOR.PATCH` with no prefix.
    ///
    /// Grammar checks (leading zeros, component count, numeric parts) are
    /// delegated to `semver`; pre-release and build metadata are rejected on
    /// top of that.
    pub fn parse(text: &str) -> Result<Self> {
        let parsed = semver::Version::parse(text)
            .map_err(|e| AutoVersionError::version(format!("'{}': {}", text, e)))?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(AutoVersionError::version(format!(
                "'{}': pre-release and build metadata are not supported",
                text
            )));
        }

        Ok(Version::new(parsed.major, parsed.minor, parsed.patch))
    }

    /// Same major and minor, patch + 1
    pub fn next_patch(&self) -> Self {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch.saturating_add(1),
        }
    }

    pub fn baseline(&self) -> Baseline {
        Baseline::new(self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = AutoVersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The MAJOR.MINOR line a release belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Baseline {
    pub major: u64,
    pub minor: u64,
}

impl Baseline {
    pub fn new(major: u64, minor: u64) -> Self {
        Baseline { major, minor }
    }

    /// Whether `version` sits on this line (exact major and minor match)
    pub fn contains(&self, version: &Version) -> bool {
        version.major == self.major && version.minor == self.minor
    }

    /// `MAJOR.MINOR.0`
    pub fn first_release(&self) -> Version {
        Version::new(self.major, self.minor, 0)
    }
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_via_from_str() {
        let v: Version = "10.20.30".parse().unwrap();
        assert_eq!(v, Version::new(10, 20, 30));
    }

    #[test]
    fn test_version_parse_invalid() {
        for text in [
            "", "abc", "1.x.0", "1.2", "1.2.3.4", "-1.2.3", "01.2.3", "1.2.3 ", "v1.2.3",
        ] {
            assert!(Version::parse(text).is_err(), "'{}' should not parse", text);
        }
    }

    #[test]
    fn test_version_parse_rejects_metadata() {
        assert!(Version::parse("1.2.3-beta.1").is_err());
        assert!(Version::parse("1.2.3+build.5").is_err());
    }

    #[test]
    fn test_version_ordering_is_numeric() {
        assert!(Version::new(1, 2, 10) > Version::new(1, 2, 9));
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 99));
        assert!(Version::new(2, 0, 0) > Version::new(1, 99, 99));
    }

    #[test]
    fn test_version_next_patch() {
        assert_eq!(Version::new(1, 2, 3).next_patch(), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }

    #[test]
    fn test_baseline_contains_exact_minor_only() {
        let baseline = Baseline::new(1, 2);
        assert!(baseline.contains(&Version::new(1, 2, 7)));
        assert!(!baseline.contains(&Version::new(1, 20, 0)));
        assert!(!baseline.contains(&Version::new(1, 23, 0)));
        assert!(!baseline.contains(&Version::new(2, 2, 0)));
    }

    #[test]
    fn test_baseline_first_release_and_display() {
        let baseline = Version::new(3, 4, 5).baseline();
        assert_eq!(baseline, Baseline::new(3, 4));
        assert_eq!(baseline.first_release(), Version::new(3, 4, 0));
        assert_eq!(baseline.to_string(), "3.4");
    }
}
