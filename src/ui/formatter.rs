//! Formatting functions for terminal output.
//!
//! The `format_*` functions build strings and are pure; the `display_*`
//! functions print them.

use crate::cli::WorkflowResult;

/// Red "ERROR:" prefix followed by the message.
pub fn format_error(message: &str) -> String {
    format!("\x1b[31mERROR:\x1b[0m {}", message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Render the computed versions as an aligned table.
///
/// Branch builds also show the build metadata line.
pub fn format_workflow_result(result: &WorkflowResult) -> String {
    let final_versions = &result.final_versions;
    let mut rows = vec![
        ("Run mode", result.run_mode.to_string()),
        ("Development version", final_versions.development.clone()),
        ("Release version", final_versions.release.clone()),
        ("SCM version", final_versions.scm.clone()),
    ];
    if result.run_mode.is_branch() {
        rows.push(("Build metadata", final_versions.build_metadata.clone()));
    }

    let mut out = String::from("\x1b[1mComputed versions:\x1b[0m\n");
    for (label, value) in rows {
        out.push_str(&format!("  {:<20} [ \x1b[32m{}\x1b[0m ]\n", label, value));
    }
    out
}

/// Display the computed versions.
pub fn display_workflow_result(result: &WorkflowResult) {
    print!("{}", format_workflow_result(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FinalVersionBundle, RunMode, VersionBundle};

    fn result(run_mode: RunMode, build_metadata: &str) -> WorkflowResult {
        WorkflowResult {
            run_mode,
            bundle: VersionBundle {
                development: "1.1.0-SNAPSHOT".to_string(),
                release: "1.1.0".to_string(),
                scm: "1.1.0".to_string(),
                major: 1,
                minor: 1,
                patch: 0,
            },
            final_versions: FinalVersionBundle {
                development: "1.1.0-SNAPSHOT".to_string(),
                build_metadata: build_metadata.to_string(),
                scm: format!("1.1.0{}", build_metadata),
                release: "1.1.0".to_string(),
            },
        }
    }

    #[test]
    fn test_format_regular_build() {
        let out = format_workflow_result(&result(RunMode::Native, ""));
        assert!(out.contains("NATIVE"));
        assert!(out.contains("1.1.0-SNAPSHOT"));
        assert!(!out.contains("Build metadata"));
    }

    #[test]
    fn test_format_branch_build_shows_metadata() {
        let out = format_workflow_result(&result(RunMode::NativeBranch, "+abc"));
        assert!(out.contains("Build metadata"));
        assert!(out.contains("1.1.0+abc"));
    }

    #[test]
    fn test_format_error() {
        let out = format_error("Malformed version: 1.2");
        assert!(out.starts_with("\x1b[31mERROR:\x1b[0m "));
        assert!(out.ends_with("Malformed version: 1.2"));
    }
}
