use crate::error::{Result, SemverError};
use git2::Repository as Git2Repo;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Mutex<Git2Repo>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo: Mutex::new(repo),
        }
    }
}

impl super::RepositoryProvider for Git2Repository {
    fn check_local_version(&self, tag: &str) -> Result<()> {
        let reference_name = format!("refs/tags/{}", tag);
        let repo = self
            .repo
            .lock()
            .map_err(|_| SemverError::repository_inconsistency("Repository lock poisoned"))?;

        let outcome = match repo.find_reference(&reference_name) {
            Ok(reference) => {
                let target = reference
                    .peel(git2::ObjectType::Any)
                    .map(|object| object.id().to_string())
                    .unwrap_or_else(|_| "unknown".to_string());

                Err(SemverError::repository_inconsistency(format!(
                    "Tag '{}' already exists locally (points at {})",
                    tag, target
                )))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                debug!(tag, "tag is free in local repository");
                Ok(())
            }
            Err(e) => Err(SemverError::Git(e)),
        };
        outcome
    }
}
