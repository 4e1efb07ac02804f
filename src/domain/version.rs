use crate::error::{Result, SemverError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Suffix carried by every development version
pub const DEVELOPMENT_SUFFIX: &str = "-SNAPSHOT";

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from a project version string (e.g., "1.2.3-SNAPSHOT" -> (1,2,3))
    ///
    /// The string must split on `.` into exactly three segments. The third
    /// segment is cut at its first `-`, which drops a development suffix.
    pub fn parse(version: &str) -> Result<Self> {
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() != 3 {
            return Err(SemverError::malformed_version(format!(
                "Unrecognized version pattern: '{}' - expected MAJOR.MINOR.PATCH",
                version
            )));
        }

        let patch_part = parts[2].split('-').next().unwrap_or_default();

        Ok(SemanticVersion {
            major: parse_component("major", parts[0], version)?,
            minor: parse_component("minor", parts[1], version)?,
            patch: parse_component("patch", patch_part, version)?,
        })
    }

    /// Bump version according to bump kind; `None` leaves it untouched
    ///
    /// Fails with `MalformedVersion` when the bumped component would not
    /// fit in a `u32`.
    pub fn bump(&self, bump_kind: Option<BumpKind>) -> Result<Self> {
        let bumped = match bump_kind {
            Some(BumpKind::Major) => SemanticVersion::new(increment("major", self.major)?, 0, 0),
            Some(BumpKind::Minor) => {
                SemanticVersion::new(self.major, increment("minor", self.minor)?, 0)
            }
            Some(BumpKind::Patch) => {
                SemanticVersion::new(self.major, self.minor, increment("patch", self.patch)?)
            }
            None => *self,
        };
        Ok(bumped)
    }

    /// Development form of this version, e.g. "1.2.3-SNAPSHOT"
    pub fn development(&self) -> String {
        format!("{}{}", self, DEVELOPMENT_SUFFIX)
    }

    /// Zero-padded, separator-free form used by RPM tags, e.g. "001002003"
    pub fn numeric(&self) -> String {
        format!("{:03}{:03}{:03}", self.major, self.minor, self.patch)
    }
}

fn parse_component(name: &str, raw: &str, version: &str) -> Result<u32> {
    raw.parse::<u32>().map_err(|_| {
        SemverError::malformed_version(format!(
            "Invalid {} version '{}' in '{}'",
            name, raw, version
        ))
    })
}

fn increment(name: &str, value: u32) -> Result<u32> {
    value.checked_add(1).ok_or_else(|| {
        SemverError::malformed_version(format!("Cannot bump {} version beyond {}", name, value))
    })
}

impl FromStr for SemanticVersion {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Requested version increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl FromStr for BumpKind {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(SemverError::config(format!("Unknown bump kind: '{}'", other))),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        };
        f.write_str(name)
    }
}
