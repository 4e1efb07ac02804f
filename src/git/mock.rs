use crate::error::{Result, SemverError};
use crate::git::RepositoryProvider;
use std::collections::HashSet;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: HashSet<String>,
    checked: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository that already carries the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockRepository {
            tags: tags.into_iter().map(Into::into).collect(),
            checked: Mutex::new(Vec::new()),
        }
    }

    /// Add an existing tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(name.into());
    }

    /// Tags the repository was asked to check, in call order
    pub fn checked_tags(&self) -> Vec<String> {
        self.checked
            .lock()
            .map(|checked| checked.clone())
            .unwrap_or_default()
    }
}

impl RepositoryProvider for MockRepository {
    fn check_local_version(&self, tag: &str) -> Result<()> {
        if let Ok(mut checked) = self.checked.lock() {
            checked.push(tag.to_string());
        }

        if self.tags.contains(tag) {
            return Err(SemverError::repository_inconsistency(format!(
                "Tag '{}' already exists in the local repository",
                tag
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_existing_tag() {
        let mut repo = MockRepository::new();
        repo.add_tag("1.0.0");

        let err = repo.check_local_version("1.0.0").unwrap_err();
        assert!(matches!(err, SemverError::RepositoryInconsistency(_)));
        assert!(repo.check_local_version("1.0.1").is_ok());
    }

    #[test]
    fn test_mock_repository_records_checks() {
        let repo = MockRepository::default();
        repo.check_local_version("1.0.0").unwrap();
        repo.check_local_version("feature-x001000000").unwrap();

        assert_eq!(
            repo.checked_tags(),
            vec!["1.0.0".to_string(), "feature-x001000000".to_string()]
        );
    }
}
