use thiserror::Error;

/// Unified error type for semver-release operations
#[derive(Error, Debug)]
pub enum SemverError {
    #[error("Malformed version: {0}")]
    MalformedVersion(String),

    #[error("Repository inconsistency: {0}")]
    RepositoryInconsistency(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-release
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create a malformed version error with context
    pub fn malformed_version(msg: impl Into<String>) -> Self {
        SemverError::MalformedVersion(msg.into())
    }

    /// Create a repository inconsistency error with context
    pub fn repository_inconsistency(msg: impl Into<String>) -> Self {
        SemverError::RepositoryInconsistency(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverError::Config(msg.into())
    }

    /// Whether the error should abort the whole release pipeline
    pub fn is_malformed_version(&self) -> bool {
        matches!(self, SemverError::MalformedVersion(_))
    }
}
