//! Global constants for the shipstage application.
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make configuration changes easier.

// Transfer constants
/// Default SFTP port
pub const SFTP_DEFAULT_PORT: u16 = 22;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;

// Deployment constants
/// Deployment id applied to artifacts when no GitHub notification happens
pub const DEFAULT_DEPLOYMENT_ID: &str = "deployment";

/// Revision reported to GitHub when none is given
pub const DEFAULT_REVISION: &str = "snapshot";

/// Environment reported to GitHub when none is given
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Task name recorded on created deployments
pub const DEPLOYMENT_TASK: &str = "deploy";

// Manifest constants
/// Conventional manifest location, resolved against the working directory
pub const DEFAULT_MANIFEST_PATH: &str = "package.json";

// GitHub API constants
/// Base URL of the GitHub REST API
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Media type sent with every GitHub API request
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

/// User agent sent with GitHub API requests (GitHub rejects anonymous agents)
pub const HTTP_USER_AGENT: &str = concat!("shipstage/", env!("CARGO_PKG_VERSION"));

/// HTTP request timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Environment variable consulted when no token is passed explicitly
pub const GITHUB_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
