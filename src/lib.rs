//! # shipstage
//!
//! A build-pipeline stage that ships build artifacts to a server over SFTP
//! and records the deployment with GitHub.
//!
//! ## Overview
//!
//! shipstage sits at the end of a build: it takes the artifacts the build
//! produced, optionally creates a GitHub deployment for the repository named
//! in the project manifest, tags every artifact file name with the
//! deployment id, and uploads the bytes unchanged to a remote directory.
//!
//! ## Features
//!
//! - **SFTP transfer**: Key-based authentication, one reused SSH session
//!   per invocation
//! - **GitHub deployments**: At most one deployment recorded per
//!   invocation, before the first upload
//! - **Deployment tagging**: File names carry the deployment id ahead of
//!   the extension, so `package.tar.gz` becomes `package-1234.tar.gz`
//! - **Per-artifact errors**: One failing artifact does not stop the rest
//!   of the stream
//! - **Library and CLI**: Usable from build tooling or the `shipstage`
//!   binary
//!
//! ## Usage
//!
//! ```no_run
//! use shipstage::config::{DeployConfig, DeployOptions};
//! use shipstage::github::GithubClient;
//! use shipstage::pipeline::{Artifact, DeployStage};
//! use shipstage::transfer::SftpTransport;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let options = DeployOptions {
//!     host: Some("deploy.example.com".to_string()),
//!     user: Some("deployer".to_string()),
//!     remote_path: Some("/srv/builds".to_string()),
//!     key: Some("/home/ci/.ssh/id_ed25519".into()),
//!     ..Default::default()
//! };
//! let config = DeployConfig::resolve(&options)?;
//!
//! // A notifier is only built when a token is configured; without one the
//! // notification step is a pass-through.
//! let notifier = config.github_token.clone().map(GithubClient::new).transpose()?;
//! let transport = SftpTransport::new(config.sftp_config());
//! let stage = DeployStage::new(config, notifier, transport);
//!
//! let deployed = stage
//!     .deploy(Artifact::new("package.tar.gz", &b"build output"[..]))
//!     .await?;
//! println!("stored as {}", deployed.remote_name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`config`]: Invocation options and validated deploy configuration
//! - [`manifest`]: Project manifest loading and repository URL parsing
//! - [`github`]: GitHub deployments API client and the notifier seam
//! - [`pipeline`]: The notify, rename and transfer stage
//! - [`transfer`]: SFTP transfer target
//! - [`errors`]: Error types shared across the pipeline
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Invocation options and validated deploy configuration
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types shared across the pipeline
pub mod errors;

/// GitHub deployments API client and the notifier seam
pub mod github;

/// Project manifest loading and repository URL parsing
pub mod manifest;

/// The deploy pipeline stage
pub mod pipeline;

/// Artifact transfer over SFTP
pub mod transfer;
