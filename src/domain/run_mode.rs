//! Pipeline run modes
//!
//! A run mode folds two independent axes into one closed set: whether the
//! build comes from a branch, and whether the packaging format needs a
//! numeric-only tag (RPM).

use crate::error::{Result, SemverError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Context the release pipeline runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RunMode {
    #[default]
    Native,
    NativeBranch,
    Release,
    ReleaseBranch,
    NativeRpm,
    NativeBranchRpm,
    ReleaseRpm,
    ReleaseBranchRpm,
}

impl RunMode {
    /// All run modes, in declaration order
    pub const ALL: [RunMode; 8] = [
        RunMode::Native,
        RunMode::NativeBranch,
        RunMode::Release,
        RunMode::ReleaseBranch,
        RunMode::NativeRpm,
        RunMode::NativeBranchRpm,
        RunMode::ReleaseRpm,
        RunMode::ReleaseBranchRpm,
    ];

    /// Canonical upper-case name, e.g. "NATIVE_BRANCH_RPM"
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Native => "NATIVE",
            RunMode::NativeBranch => "NATIVE_BRANCH",
            RunMode::Release => "RELEASE",
            RunMode::ReleaseBranch => "RELEASE_BRANCH",
            RunMode::NativeRpm => "NATIVE_RPM",
            RunMode::NativeBranchRpm => "NATIVE_BRANCH_RPM",
            RunMode::ReleaseRpm => "RELEASE_RPM",
            RunMode::ReleaseBranchRpm => "RELEASE_BRANCH_RPM",
        }
    }

    /// Builds from a branch (`*_BRANCH*`)
    pub fn is_branch(&self) -> bool {
        matches!(
            self,
            RunMode::NativeBranch
                | RunMode::ReleaseBranch
                | RunMode::NativeBranchRpm
                | RunMode::ReleaseBranchRpm
        )
    }

    /// Targets RPM packaging (`*_RPM`)
    pub fn is_rpm(&self) -> bool {
        matches!(
            self,
            RunMode::NativeRpm
                | RunMode::NativeBranchRpm
                | RunMode::ReleaseRpm
                | RunMode::ReleaseBranchRpm
        )
    }

    /// Only the branch RPM variants switch tags to the numeric form
    pub fn is_rpm_branch(&self) -> bool {
        self.is_rpm() && self.is_branch()
    }
}

impl FromStr for RunMode {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        RunMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| SemverError::config(format!("Unknown run mode: '{}'", s)))
    }
}

impl TryFrom<String> for RunMode {
    type Error = SemverError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<RunMode> for String {
    fn from(mode: RunMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_native() {
        assert_eq!(RunMode::default(), RunMode::Native);
    }

    #[test]
    fn test_branch_axis() {
        let branch: Vec<RunMode> = RunMode::ALL.into_iter().filter(|m| m.is_branch()).collect();
        assert_eq!(
            branch,
            vec![
                RunMode::NativeBranch,
                RunMode::ReleaseBranch,
                RunMode::NativeBranchRpm,
                RunMode::ReleaseBranchRpm
            ]
        );
    }

    #[test]
    fn test_rpm_branch_only_two_variants() {
        let rpm_branch: Vec<RunMode> = RunMode::ALL
            .into_iter()
            .filter(|m| m.is_rpm_branch())
            .collect();
        assert_eq!(
            rpm_branch,
            vec![RunMode::NativeBranchRpm, RunMode::ReleaseBranchRpm]
        );
        assert!(RunMode::NativeRpm.is_rpm());
        assert!(!RunMode::NativeRpm.is_rpm_branch());
    }

    #[test]
    fn test_parse_names() {
        for mode in RunMode::ALL {
            assert_eq!(mode.as_str().parse::<RunMode>().unwrap(), mode);
        }
        assert_eq!(
            "native-branch-rpm".parse::<RunMode>().unwrap(),
            RunMode::NativeBranchRpm
        );
        assert!("NIGHTLY".parse::<RunMode>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RunMode::ReleaseBranch.to_string(), "RELEASE_BRANCH");
    }
}
