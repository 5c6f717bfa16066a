//! Artifact transfer over SFTP.
//!
//! The deploy stage hands artifacts to an [`ArtifactTransport`], which ships
//! them to the configured remote directory. The bundled implementation is
//! [`SftpTransport`], which authenticates with a private key and reuses one
//! SSH session for every artifact of an invocation.

mod sftp;
mod transport;

pub use sftp::{remote_file_path, SftpConfig, SftpTransport};
pub use transport::{ArtifactTransport, TransferError};
