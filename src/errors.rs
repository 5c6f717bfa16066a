//! Error types for configuration resolution and artifact deployment.

use thiserror::Error;

use crate::transfer::TransferError;

/// Errors surfaced while resolving options or deploying artifacts.
///
/// `MissingOption` is the only variant raised before any artifact is
/// processed; every other variant is reported per artifact so a stream of
/// artifacts can keep going after one of them fails.
#[derive(Debug, Error)]
pub enum DeployError {
    /// A mandatory invocation option was absent or empty.
    #[error("`{0}` is missing")]
    MissingOption(&'static str),

    /// No GitHub repository could be determined from the project manifest.
    #[error("cannot find a GitHub repository: {0}")]
    RepositoryNotFound(String),

    /// The repository URL was found but could not be split into an owner
    /// and a repository name.
    #[error("cannot find GitHub owner or repository name in `{0}`")]
    RepositoryParse(String),

    /// The deployment-creation request was rejected or never completed.
    #[error("GitHub deployment request failed: {0}")]
    Notification(String),

    /// Shipping the artifact to the remote host failed.
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// A local artifact could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for DeployError {
    fn from(err: reqwest::Error) -> Self {
        DeployError::Notification(err.to_string())
    }
}
