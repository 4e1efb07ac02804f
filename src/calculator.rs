//! Version calculation for the release pipeline
//!
//! Every function here is pure apart from the explicit repository check in
//! [parse_and_bump] and the tracing events. Nothing is kept between calls.

use tracing::{debug, error, info};

use crate::domain::{
    BumpKind, FinalVersionBundle, RunMode, SemanticVersion, VersionBundle, DEVELOPMENT_SUFFIX,
};
use crate::error::Result;
use crate::git::RepositoryProvider;

/// Parse the current project version, bump it and derive the tag and release versions.
///
/// The tag without build metadata is handed to `repository` for validation
/// once everything is computed; its error is returned unchanged.
///
/// # Arguments
/// * `current_version` - Project version, e.g. "1.2.3-SNAPSHOT"
/// * `bump_kind` - Component to increment; `None` keeps the version as is
/// * `run_mode` - Pipeline context selecting the tag format
/// * `branch_qualifier` - Prefix for RPM branch tags
/// * `extra_metadata` - Free-form build metadata appended to the tag
/// * `repository` - Collaborator validating the computed tag
///
/// # Example
/// ```rust
/// # use semver_release::calculator::parse_and_bump;
/// # use semver_release::domain::{BumpKind, RunMode};
/// # use semver_release::git::NoopRepository;
/// let bundle = parse_and_bump(
///     "2.4.9-SNAPSHOT",
///     Some(BumpKind::Patch),
///     RunMode::Native,
///     "",
///     "",
///     &NoopRepository,
/// )
/// .unwrap();
/// assert_eq!(bundle.development, "2.4.10-SNAPSHOT");
/// assert_eq!(bundle.scm, "2.4.10");
/// ```
pub fn parse_and_bump<R: RepositoryProvider + ?Sized>(
    current_version: &str,
    bump_kind: Option<BumpKind>,
    run_mode: RunMode,
    branch_qualifier: &str,
    extra_metadata: &str,
    repository: &R,
) -> Result<VersionBundle> {
    let current = SemanticVersion::parse(current_version).map_err(|e| {
        error!(version = current_version, "unrecognized version pattern, terminating");
        e
    })?;

    debug!(
        major = current.major,
        minor = current.minor,
        patch = current.patch,
        "parsed project version"
    );

    let version = current.bump(bump_kind)?;
    let development = version.development();

    let (scm_tag, release) = if run_mode.is_branch() {
        let tag = derive_release_branch_tag(run_mode, branch_qualifier, version);
        (tag.clone(), tag)
    } else {
        (derive_release_tag(run_mode, version), version.to_string())
    };

    let build_metadata = derive_build_metadata(run_mode, extra_metadata, version);
    let scm = format!("{}{}", scm_tag, build_metadata);

    info!(%development, "new development version");
    info!(%scm, "new scm version");
    info!(%release, "new release version");

    repository.check_local_version(&scm_tag)?;

    Ok(VersionBundle {
        development,
        release,
        scm,
        major: version.major,
        minor: version.minor,
        patch: version.patch,
    })
}

/// Release tag for version control.
///
/// Plain dotted form, except in the RPM branch modes where it becomes the
/// nine-digit numeric form (e.g. "001001000"). No branch qualifier is added.
pub fn derive_release_tag(run_mode: RunMode, version: SemanticVersion) -> String {
    if run_mode.is_rpm_branch() {
        version.numeric()
    } else {
        version.to_string()
    }
}

/// Release tag for branch builds.
///
/// Same as [derive_release_tag], but the RPM branch modes prepend the
/// branch qualifier verbatim (e.g. "feature-x001001000").
pub fn derive_release_branch_tag(
    run_mode: RunMode,
    branch_qualifier: &str,
    version: SemanticVersion,
) -> String {
    if run_mode.is_rpm_branch() {
        format!("{}{}", branch_qualifier, version.numeric())
    } else {
        version.to_string()
    }
}

/// Build metadata appended to the scm tag.
///
/// Zero, one or two `+`-prefixed segments: the dotted version for RPM modes,
/// then the free-form metadata when it is non-empty.
pub fn derive_build_metadata(run_mode: RunMode, metadata: &str, version: SemanticVersion) -> String {
    let mut build_metadata = String::new();
    if run_mode.is_rpm() {
        build_metadata.push('+');
        build_metadata.push_str(&version.to_string());
    }
    if !metadata.is_empty() {
        build_metadata.push('+');
        build_metadata.push_str(metadata);
    }
    build_metadata
}

/// Final versions for a branch build, recomputed from the bundle's components.
pub fn derive_release_branch_versions(
    bundle: &VersionBundle,
    run_mode: RunMode,
    metadata: &str,
    branch_qualifier: &str,
) -> FinalVersionBundle {
    let version = bundle.version();
    let release_tag = derive_release_tag(run_mode, version);
    let build_metadata = derive_build_metadata(run_mode, metadata, version);

    let release = if branch_qualifier.is_empty() {
        release_tag
    } else {
        format!("{}-{}", branch_qualifier, release_tag)
    };
    let scm = format!("{}{}", release, build_metadata);

    info!(development = %bundle.development, "new development version");
    info!(%build_metadata, "new branch build metadata");
    info!(%scm, "new branch scm version");
    info!(%release, "new branch release version");

    FinalVersionBundle {
        development: bundle.development.clone(),
        build_metadata,
        scm,
        release,
    }
}

/// Final versions for a regular build: the scm tag is the release version.
pub fn derive_release_versions(bundle: &VersionBundle) -> FinalVersionBundle {
    FinalVersionBundle {
        development: bundle.development.clone(),
        build_metadata: String::new(),
        scm: bundle.release.clone(),
        release: bundle.release.clone(),
    }
}

/// Whether a project version is unusable for a release.
///
/// A version is malformed when it is missing, empty, or lacks the
/// `-SNAPSHOT` development suffix.
pub fn is_version_malformed(project_version: Option<&str>) -> bool {
    match project_version {
        None | Some("") => {
            error!("project version is missing or empty");
            true
        }
        Some(version) if !version.contains(DEVELOPMENT_SUFFIX) => {
            error!(version, "project version does not contain {}", DEVELOPMENT_SUFFIX);
            true
        }
        Some(version) => {
            info!(version, "project version is correct");
            false
        }
    }
}
