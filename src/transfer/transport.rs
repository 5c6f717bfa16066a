use async_trait::async_trait;
use thiserror::Error;

/// A trait for targets that receive deployed artifacts.
///
/// The deploy stage only hands over a file name and its bytes, so tests can
/// substitute an in-memory target for a real SFTP server.
#[async_trait]
pub trait ArtifactTransport: Send + Sync {
    /// Ship one artifact to the remote target under the given file name.
    async fn upload(&self, file_name: &str, contents: &[u8]) -> Result<(), TransferError>;
}

/// Errors raised while connecting to or writing at the transfer target.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The TCP connection could not be established.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    /// The SSH session could not be created.
    #[error("failed to start SSH session: {0}")]
    Session(#[source] ssh2::Error),

    /// The SSH handshake was not completed.
    #[error("SSH handshake failed: {0}")]
    Handshake(#[source] ssh2::Error),

    /// Public-key authentication failed before the server ruled on it.
    #[error("authentication as {user} with key {key} failed: {source}")]
    Auth {
        user: String,
        key: String,
        source: ssh2::Error,
    },

    /// The server ruled on the key and turned it down.
    #[error("server rejected public-key authentication for {user}")]
    AuthRejected { user: String },

    /// The SFTP subsystem could not be opened on the session.
    #[error("failed to open SFTP subsystem: {0}")]
    Subsystem(#[source] ssh2::Error),

    /// The remote file could not be created.
    #[error("failed to create remote file {path}: {source}")]
    Create { path: String, source: ssh2::Error },

    /// Writing the remote file failed partway.
    #[error("failed to write remote file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// Any other I/O failure around the transfer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
