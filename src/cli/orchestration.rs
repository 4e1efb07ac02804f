//! Release workflow orchestration
//!
//! Composes the calculator operations in the order the release pipeline
//! runs them. It stays independent of clap so the workflow can be driven
//! programmatically.

use serde::Serialize;
use tracing::info;

use crate::calculator;
use crate::config::Config;
use crate::domain::{BumpKind, FinalVersionBundle, RunMode, VersionBundle};
use crate::error::{Result, SemverError};
use crate::git::RepositoryProvider;

/// Arguments for the release workflow
///
/// Options left as `None` fall back to the loaded [Config].
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Current project version, e.g. "1.2.3-SNAPSHOT"
    pub current_version: String,

    /// Component to increment
    pub bump_kind: BumpKind,

    /// Overrides the configured run mode
    pub run_mode: Option<RunMode>,

    /// Overrides the configured branch qualifier
    pub branch_version: Option<String>,

    /// Overrides the configured build metadata
    pub metadata: Option<String>,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowResult {
    /// Run mode the versions were computed for
    pub run_mode: RunMode,

    /// Raw versions from the bump
    pub bundle: VersionBundle,

    /// Versions handed to the release step
    pub final_versions: FinalVersionBundle,
}

/// Main release workflow
///
/// 1. Reject malformed project versions
/// 2. Merge explicit arguments over the configuration
/// 3. Bump the version and validate the tag against the repository
/// 4. Derive the final release versions for branch or regular builds
pub fn run_release_workflow<R: RepositoryProvider + ?Sized>(
    args: ReleaseWorkflowArgs,
    config: &Config,
    repository: &R,
) -> Result<WorkflowResult> {
    if calculator::is_version_malformed(Some(&args.current_version)) {
        return Err(SemverError::malformed_version(format!(
            "Project version '{}' must be MAJOR.MINOR.PATCH-SNAPSHOT",
            args.current_version
        )));
    }

    let run_mode = args.run_mode.unwrap_or(config.run_mode);
    let branch_version = args
        .branch_version
        .unwrap_or_else(|| config.branch_version.clone());
    let metadata = args.metadata.unwrap_or_else(|| config.metadata.clone());

    info!(%run_mode, bump = %args.bump_kind, "computing release versions");

    let bundle = calculator::parse_and_bump(
        &args.current_version,
        Some(args.bump_kind),
        run_mode,
        &branch_version,
        &metadata,
        repository,
    )?;

    let final_versions = if run_mode.is_branch() {
        calculator::derive_release_branch_versions(&bundle, run_mode, &metadata, &branch_version)
    } else {
        calculator::derive_release_versions(&bundle)
    };

    Ok(WorkflowResult {
        run_mode,
        bundle,
        final_versions,
    })
}
