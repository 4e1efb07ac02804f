use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use semver_release::calculator;
use semver_release::cli::{run_release_workflow, ReleaseWorkflowArgs};
use semver_release::config;
use semver_release::domain::{BumpKind, RunMode};
use semver_release::git::{Git2Repository, NoopRepository, RepositoryProvider};
use semver_release::ui;

#[derive(Parser)]
#[command(
    name = "semver-release",
    version,
    about = "Compute development, scm and release versions for a release pipeline"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bump the project version and derive the release versions
    Bump {
        #[arg(help = "Component to bump: major, minor or patch")]
        kind: BumpKind,

        #[arg(help = "Current project version, e.g. 1.2.3-SNAPSHOT")]
        current_version: String,

        #[arg(long, help = "Run mode, e.g. NATIVE or RELEASE_BRANCH_RPM")]
        run_mode: Option<RunMode>,

        #[arg(long, help = "Branch qualifier for branch builds")]
        branch_version: Option<String>,

        #[arg(long, help = "Build metadata appended to the scm version")]
        metadata: Option<String>,

        #[arg(short, long, help = "Custom configuration file path")]
        config: Option<String>,

        #[arg(long, default_value = ".", help = "Repository used to validate the tag")]
        repo: String,

        #[arg(long, help = "Do not validate the tag against the repository")]
        skip_repository_check: bool,

        #[arg(long, help = "Print the versions as TOML")]
        toml: bool,
    },
    /// Check that a project version is usable for a release
    Check {
        #[arg(help = "Project version to check")]
        version: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Check { version } => {
            if calculator::is_version_malformed(Some(&version)) {
                ui::display_error(&format!("Malformed project version: '{}'", version));
                std::process::exit(1);
            }
            ui::display_success(&format!("Project version is correct: {}", version));
            Ok(())
        }
        Command::Bump {
            kind,
            current_version,
            run_mode,
            branch_version,
            metadata,
            config: config_path,
            repo,
            skip_repository_check,
            toml: as_toml,
        } => {
            let config = match config::load_config(config_path.as_deref()) {
                Ok(cfg) => cfg,
                Err(e) => {
                    ui::display_error(&format!("Error loading config: {}", e));
                    std::process::exit(1);
                }
            };

            let repository: Box<dyn RepositoryProvider> = if skip_repository_check {
                Box::new(NoopRepository)
            } else {
                match Git2Repository::open(&repo) {
                    Ok(repository) => Box::new(repository),
                    Err(e) => {
                        ui::display_error(&format!("Git repository error: {}", e));
                        std::process::exit(1);
                    }
                }
            };

            let workflow_args = ReleaseWorkflowArgs {
                current_version,
                bump_kind: kind,
                run_mode,
                branch_version,
                metadata,
            };

            let result = match run_release_workflow(workflow_args, &config, &repository) {
                Ok(result) => result,
                Err(e) => {
                    ui::display_error(&e.to_string());
                    std::process::exit(1);
                }
            };

            if as_toml {
                let rendered =
                    toml::to_string(&result).context("Failed to render versions as TOML")?;
                print!("{}", rendered);
            } else {
                ui::display_workflow_result(&result);
            }
            Ok(())
        }
    }
}
