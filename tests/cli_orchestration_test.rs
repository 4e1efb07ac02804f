// tests/cli_orchestration_test.rs
use semver_release::cli::orchestration::{run_release_workflow, ReleaseWorkflowArgs};
use semver_release::config::Config;
use semver_release::domain::{BumpKind, RunMode};
use semver_release::git::MockRepository;
use semver_release::SemverError;

fn args(current_version: &str, bump_kind: BumpKind) -> ReleaseWorkflowArgs {
    ReleaseWorkflowArgs {
        current_version: current_version.to_string(),
        bump_kind,
        run_mode: None,
        branch_version: None,
        metadata: None,
    }
}

#[test]
fn test_regular_build_uses_release_as_scm() {
    let repo = MockRepository::new();
    let config = Config {
        metadata: "build.9".to_string(),
        ..Config::default()
    };

    let result =
        run_release_workflow(args("2.4.9-SNAPSHOT", BumpKind::Patch), &config, &repo).unwrap();

    assert_eq!(result.run_mode, RunMode::Native);
    assert_eq!(result.bundle.scm, "2.4.10+build.9");
    assert_eq!(result.final_versions.scm, "2.4.10");
    assert_eq!(result.final_versions.release, "2.4.10");
    assert!(result.final_versions.build_metadata.is_empty());
}

#[test]
fn test_branch_build_from_config() {
    let repo = MockRepository::new();
    let config = Config {
        run_mode: RunMode::NativeBranchRpm,
        branch_version: "feature-x".to_string(),
        metadata: "abc123".to_string(),
    };

    let result =
        run_release_workflow(args("1.0.0-SNAPSHOT", BumpKind::Minor), &config, &repo).unwrap();

    assert_eq!(result.bundle.scm, "feature-x001001000+1.1.0+abc123");
    assert_eq!(result.final_versions.release, "feature-x-001001000");
    assert_eq!(result.final_versions.build_metadata, "+1.1.0+abc123");
    assert_eq!(
        result.final_versions.scm,
        "feature-x-001001000+1.1.0+abc123"
    );
    assert_eq!(repo.checked_tags(), vec!["feature-x001001000".to_string()]);
}

#[test]
fn test_arguments_override_config() {
    let repo = MockRepository::new();
    let config = Config {
        run_mode: RunMode::NativeBranchRpm,
        branch_version: "feature-x".to_string(),
        metadata: "abc123".to_string(),
    };
    let workflow_args = ReleaseWorkflowArgs {
        run_mode: Some(RunMode::Release),
        metadata: Some(String::new()),
        ..args("3.3.3-SNAPSHOT", BumpKind::Major)
    };

    let result = run_release_workflow(workflow_args, &config, &repo).unwrap();

    assert_eq!(result.run_mode, RunMode::Release);
    assert_eq!(result.bundle.scm, "4.0.0");
    assert_eq!(result.final_versions.release, "4.0.0");
}

#[test]
fn test_missing_snapshot_aborts_before_repository() {
    let repo = MockRepository::new();
    let err = run_release_workflow(args("1.2.3", BumpKind::Patch), &Config::default(), &repo)
        .unwrap_err();

    assert!(matches!(err, SemverError::MalformedVersion(_)));
    assert!(repo.checked_tags().is_empty());
}

#[test]
fn test_existing_tag_aborts_workflow() {
    let repo = MockRepository::with_tags(["1.3.0"]);
    let err = run_release_workflow(
        args("1.2.7-SNAPSHOT", BumpKind::Minor),
        &Config::default(),
        &repo,
    )
    .unwrap_err();

    assert!(matches!(err, SemverError::RepositoryInconsistency(_)));
}

#[test]
fn test_unknown_configured_run_mode_uses_default_formatting() {
    let repo = MockRepository::new();
    let config = Config::from_toml(
        r#"
run_mode = "NIGHTLY_RPM"
branch_version = "feature-x"
"#,
    )
    .unwrap();

    let result =
        run_release_workflow(args("2.4.9-SNAPSHOT", BumpKind::Patch), &config, &repo).unwrap();

    assert_eq!(result.run_mode, RunMode::Native);
    assert_eq!(result.bundle.scm, "2.4.10");
    assert_eq!(result.final_versions.release, "2.4.10");
}
