//! SFTP transfer target.
//!
//! Uploads go over a single SSH session that is opened lazily on the first
//! artifact and reused for the rest of the invocation.

use std::io::Write;
use std::net::TcpStream;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use ssh2::{Session, Sftp};
use tokio::sync::Mutex;

use crate::constants::{DEFAULT_CONNECTION_TIMEOUT_SECS, SFTP_DEFAULT_PORT};
use crate::transfer::{ArtifactTransport, TransferError};

/// Configuration for SFTP transfers
#[derive(Clone, Debug)]
pub struct SftpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub private_key_path: PathBuf,
    pub remote_path: String,
    pub connection_timeout_sec: u64,
}

impl Default for SftpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: SFTP_DEFAULT_PORT,
            username: String::new(),
            private_key_path: PathBuf::new(),
            remote_path: String::new(),
            connection_timeout_sec: DEFAULT_CONNECTION_TIMEOUT_SECS,
        }
    }
}

/// An authenticated SFTP channel plus the SSH session that owns it.
struct SftpChannel {
    sftp: Sftp,
    // Dropping the session closes the channel, so it rides along.
    _session: Session,
}

/// SFTP target that writes every artifact over one shared session.
pub struct SftpTransport {
    config: SftpConfig,
    channel: Mutex<Option<SftpChannel>>,
}

impl SftpTransport {
    /// Create a new SFTP transport with the specified configuration.
    ///
    /// No connection is made until the first upload is requested.
    pub fn new(config: SftpConfig) -> Self {
        Self {
            config,
            channel: Mutex::new(None),
        }
    }

    /// Open a TCP connection, perform the SSH handshake and authenticate
    /// with the configured private key.
    fn connect(&self) -> Result<SftpChannel, TransferError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let tcp = TcpStream::connect(&addr).map_err(|source| TransferError::Connect {
            addr: addr.clone(),
            source,
        })?;

        let timeout = Duration::from_secs(self.config.connection_timeout_sec);
        tcp.set_read_timeout(Some(timeout))?;
        tcp.set_write_timeout(Some(timeout))?;

        let mut session = Session::new().map_err(TransferError::Session)?;
        session.set_tcp_stream(tcp);
        session.handshake().map_err(TransferError::Handshake)?;

        // No separate public key file; it is derived from the private key.
        session
            .userauth_pubkey_file(
                &self.config.username,
                None,
                &self.config.private_key_path,
                None,
            )
            .map_err(|source| TransferError::Auth {
                user: self.config.username.clone(),
                key: self.config.private_key_path.display().to_string(),
                source,
            })?;

        if !session.authenticated() {
            return Err(TransferError::AuthRejected {
                user: self.config.username.clone(),
            });
        }

        let sftp = session.sftp().map_err(TransferError::Subsystem)?;
        debug!("Connected to sftp://{}@{}", self.config.username, addr);

        Ok(SftpChannel {
            sftp,
            _session: session,
        })
    }
}

#[async_trait]
impl ArtifactTransport for SftpTransport {
    async fn upload(&self, file_name: &str, contents: &[u8]) -> Result<(), TransferError> {
        let remote = remote_file_path(&self.config.remote_path, file_name);

        let mut guard = self.channel.lock().await;
        let channel = match guard.take() {
            Some(channel) => channel,
            None => {
                info!(
                    "Connecting to {}:{} as {}",
                    self.config.host, self.config.port, self.config.username
                );
                self.connect()?
            }
        };

        debug!("Writing {} bytes to {}", contents.len(), remote);
        let result = write_remote(&channel.sftp, &remote, contents);
        // The session stays open for the next artifact in the stream.
        *guard = Some(channel);
        result
    }
}

/// Write one remote file in full.
fn write_remote(sftp: &Sftp, remote: &str, contents: &[u8]) -> Result<(), TransferError> {
    let mut remote_file = sftp
        .create(Path::new(remote))
        .map_err(|source| TransferError::Create {
            path: remote.to_string(),
            source,
        })?;

    remote_file
        .write_all(contents)
        .map_err(|source| TransferError::Write {
            path: remote.to_string(),
            source,
        })?;

    Ok(())
}

/// Join the configured remote directory with a file name.
pub fn remote_file_path(remote_path: &str, file_name: &str) -> String {
    format!("{}/{}", remote_path.trim_end_matches('/'), file_name)
}
