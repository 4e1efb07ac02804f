//! Domain types - pure value objects independent of git operations

pub mod bundle;
pub mod run_mode;
pub mod version;

pub use bundle::{FinalVersionBundle, VersionBundle};
pub use run_mode::RunMode;
pub use version::{BumpKind, SemanticVersion, DEVELOPMENT_SUFFIX};
