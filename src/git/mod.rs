//! Repository collaborator
//!
//! The version calculator never touches version control itself. It hands the
//! tag it computed to a [RepositoryProvider], which reports whether that tag
//! conflicts with the state of the repository.
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//! - [NoopRepository]: accepts every tag
//!
//! ```rust
//! # use semver_release::git::{RepositoryProvider, MockRepository};
//! let repo = MockRepository::with_tags(["1.0.0"]);
//! assert!(repo.check_local_version("1.0.0").is_err());
//! assert!(repo.check_local_version("1.0.1").is_ok());
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Validation hook into version control
///
/// All implementors must be `Send + Sync` so a single provider can serve
/// calculations running on several threads.
pub trait RepositoryProvider: Send + Sync {
    /// Check that `tag` can be created in the local repository
    ///
    /// # Returns
    /// * `Ok(())` - The tag does not conflict with the repository
    /// * `Err(SemverError::RepositoryInconsistency)` - The tag already exists
    ///   or otherwise conflicts with the repository state
    /// * `Err` - Any other failure reading the repository
    fn check_local_version(&self, tag: &str) -> Result<()>;
}

/// Provider that accepts every tag
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRepository;

impl RepositoryProvider for NoopRepository {
    fn check_local_version(&self, _tag: &str) -> Result<()> {
        Ok(())
    }
}

impl<R: RepositoryProvider + ?Sized> RepositoryProvider for &R {
    fn check_local_version(&self, tag: &str) -> Result<()> {
        (**self).check_local_version(tag)
    }
}

impl<R: RepositoryProvider + ?Sized> RepositoryProvider for Box<R> {
    fn check_local_version(&self, tag: &str) -> Result<()> {
        (**self).check_local_version(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_repository_accepts_everything() {
        assert!(NoopRepository.check_local_version("1.0.0").is_ok());
        assert!(NoopRepository.check_local_version("").is_ok());
    }

    #[test]
    fn test_boxed_provider_delegates() {
        let repo: Box<dyn RepositoryProvider> = Box::new(MockRepository::with_tags(["2.0.0"]));
        assert!(repo.check_local_version("2.0.0").is_err());
        assert!(repo.check_local_version("2.0.1").is_ok());
    }
}
