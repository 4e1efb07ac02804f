use super::version::SemanticVersion;
use serde::Serialize;
use std::collections::BTreeMap;

/// Versions produced by a single bump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionBundle {
    /// Next development version, always ending in `-SNAPSHOT`
    pub development: String,
    /// Version to publish
    pub release: String,
    /// Tag to create in version control, including build metadata
    pub scm: String,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionBundle {
    /// The bumped version the bundle was computed from
    pub fn version(&self) -> SemanticVersion {
        SemanticVersion::new(self.major, self.minor, self.patch)
    }

    /// String-keyed form with the components as decimal strings
    pub fn to_map(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("development".to_string(), self.development.clone()),
            ("release".to_string(), self.release.clone()),
            ("scm".to_string(), self.scm.clone()),
            ("major".to_string(), self.major.to_string()),
            ("minor".to_string(), self.minor.to_string()),
            ("patch".to_string(), self.patch.to_string()),
        ])
    }
}

/// Versions handed to the release step, with explicit build metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalVersionBundle {
    pub development: String,
    pub build_metadata: String,
    pub scm: String,
    pub release: String,
}

impl FinalVersionBundle {
    pub fn to_map(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("development".to_string(), self.development.clone()),
            ("build_metadata".to_string(), self.build_metadata.clone()),
            ("scm".to_string(), self.scm.clone()),
            ("release".to_string(), self.release.clone()),
        ])
    }
}
