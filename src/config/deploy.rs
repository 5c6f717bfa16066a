//! Invocation options and their validation.

use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ENVIRONMENT, DEFAULT_MANIFEST_PATH, DEFAULT_REVISION, SFTP_DEFAULT_PORT,
};
use crate::errors::DeployError;
use crate::github::DeploymentMeta;
use crate::transfer::SftpConfig;

/// Caller-supplied deployment options, all optional until validated.
///
/// Mirrors what a build script would pass on the command line or keep in
/// its own pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployOptions {
    /// Remote host that receives the artifacts.
    pub host: Option<String>,
    /// SSH port on the remote host.
    pub port: Option<u16>,
    /// User to authenticate as.
    pub user: Option<String>,
    /// Remote directory artifacts are written to.
    pub remote_path: Option<String>,
    /// Private key used for authentication.
    pub key: Option<PathBuf>,
    /// Revision reported to GitHub.
    pub revision: Option<String>,
    /// Environment reported to GitHub.
    pub environment: Option<String>,
    /// Free-form description attached to the deployment.
    pub description: Option<String>,
    /// Manifest holding the repository URL.
    pub manifest_path: Option<PathBuf>,
    /// Token that enables GitHub deployment notifications.
    pub github_token: Option<String>,
}

/// Validated deployment configuration with every default applied.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub remote_path: String,
    pub key: PathBuf,
    pub revision: String,
    pub environment: String,
    pub description: String,
    pub manifest_path: PathBuf,
    pub github_token: Option<String>,
}

impl DeployConfig {
    /// Validate `options` and fill in defaults.
    ///
    /// The four transfer options are mandatory and checked in a fixed order
    /// (`host`, `user`, `remote_path`, `key`); the first one absent or empty
    /// is the one reported. The key file itself is not touched here, so
    /// resolution cannot fail on a file that does not exist yet.
    pub fn resolve(options: &DeployOptions) -> Result<Self, DeployError> {
        let host = require(options.host.as_deref(), "host")?;
        let user = require(options.user.as_deref(), "user")?;
        let remote_path = require(options.remote_path.as_deref(), "remote_path")?;
        let key = match &options.key {
            Some(key) if !key.as_os_str().is_empty() => key.clone(),
            _ => return Err(DeployError::MissingOption("key")),
        };

        let config = Self {
            host,
            port: options.port.unwrap_or(SFTP_DEFAULT_PORT),
            user,
            remote_path,
            key,
            revision: or_default(options.revision.as_deref(), DEFAULT_REVISION),
            environment: or_default(options.environment.as_deref(), DEFAULT_ENVIRONMENT),
            description: options.description.clone().unwrap_or_default(),
            manifest_path: options
                .manifest_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH)),
            github_token: options.github_token.clone().filter(|t| !t.is_empty()),
        };

        debug!(
            "Resolved deploy configuration for {}@{}:{}",
            config.user, config.host, config.port
        );

        Ok(config)
    }

    /// Transfer settings for the SFTP target.
    pub fn sftp_config(&self) -> SftpConfig {
        SftpConfig {
            host: self.host.clone(),
            port: self.port,
            username: self.user.clone(),
            private_key_path: self.key.clone(),
            remote_path: self.remote_path.clone(),
            ..Default::default()
        }
    }

    /// Deployment details reported to GitHub.
    pub fn deployment_meta(&self) -> DeploymentMeta {
        DeploymentMeta {
            revision: self.revision.clone(),
            environment: self.environment.clone(),
            description: self.description.clone(),
        }
    }
}

/// Treat empty strings like absent options.
fn require(value: Option<&str>, name: &'static str) -> Result<String, DeployError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(DeployError::MissingOption(name)),
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_options() -> DeployOptions {
        DeployOptions {
            host: Some("deploy.example.com".to_string()),
            user: Some("deployer".to_string()),
            remote_path: Some("build".to_string()),
            key: Some(PathBuf::from("/home/ci/.ssh/id_ed25519")),
            ..Default::default()
        }
    }

    #[test]
    fn resolves_with_defaults() {
        let config = DeployConfig::resolve(&full_options()).unwrap();

        assert_eq!(config.host, "deploy.example.com");
        assert_eq!(config.port, SFTP_DEFAULT_PORT);
        assert_eq!(config.revision, DEFAULT_REVISION);
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(config.description, "");
        assert_eq!(config.manifest_path, PathBuf::from(DEFAULT_MANIFEST_PATH));
        assert!(config.github_token.is_none());
    }

    #[test]
    fn missing_options_are_reported_in_fixed_order() {
        assert!(matches!(
            DeployConfig::resolve(&DeployOptions::default()),
            Err(DeployError::MissingOption("host"))
        ));

        let mut options = full_options();
        options.user = None;
        assert!(matches!(
            DeployConfig::resolve(&options),
            Err(DeployError::MissingOption("user"))
        ));

        let mut options = full_options();
        options.remote_path = None;
        assert!(matches!(
            DeployConfig::resolve(&options),
            Err(DeployError::MissingOption("remote_path"))
        ));

        let mut options = full_options();
        options.key = None;
        assert!(matches!(
            DeployConfig::resolve(&options),
            Err(DeployError::MissingOption("key"))
        ));
    }

    #[test]
    fn earliest_missing_option_wins() {
        // Everything but the key is absent; host is checked first.
        let options = DeployOptions {
            key: Some(PathBuf::from("/home/ci/.ssh/id_ed25519")),
            ..Default::default()
        };
        assert!(matches!(
            DeployConfig::resolve(&options),
            Err(DeployError::MissingOption("host"))
        ));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let mut options = full_options();
        options.host = Some(String::new());
        assert!(matches!(
            DeployConfig::resolve(&options),
            Err(DeployError::MissingOption("host"))
        ));

        let mut options = full_options();
        options.key = Some(PathBuf::new());
        assert!(matches!(
            DeployConfig::resolve(&options),
            Err(DeployError::MissingOption("key"))
        ));
    }

    #[test]
    fn key_file_existence_is_not_checked() {
        let mut options = full_options();
        options.key = Some(PathBuf::from("/definitely/not/a/real/key"));
        assert!(DeployConfig::resolve(&options).is_ok());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let mut options = full_options();
        options.port = Some(2222);
        options.revision = Some("v1.2.3".to_string());
        options.environment = Some("staging".to_string());
        options.description = Some("nightly build".to_string());
        options.manifest_path = Some(PathBuf::from("web/package.json"));
        options.github_token = Some("testToken".to_string());

        let config = DeployConfig::resolve(&options).unwrap();
        assert_eq!(config.port, 2222);
        assert_eq!(config.revision, "v1.2.3");
        assert_eq!(config.environment, "staging");
        assert_eq!(config.description, "nightly build");
        assert_eq!(config.manifest_path, PathBuf::from("web/package.json"));
        assert_eq!(config.github_token.as_deref(), Some("testToken"));
    }

    #[test]
    fn empty_token_is_treated_as_absent() {
        let mut options = full_options();
        options.github_token = Some(String::new());

        let config = DeployConfig::resolve(&options).unwrap();
        assert!(config.github_token.is_none());
    }

    #[test]
    fn projections_carry_transfer_and_deployment_settings() {
        let config = DeployConfig::resolve(&full_options()).unwrap();

        let sftp = config.sftp_config();
        assert_eq!(sftp.host, "deploy.example.com");
        assert_eq!(sftp.port, SFTP_DEFAULT_PORT);
        assert_eq!(sftp.username, "deployer");
        assert_eq!(sftp.remote_path, "build");
        assert_eq!(
            sftp.private_key_path,
            PathBuf::from("/home/ci/.ssh/id_ed25519")
        );

        let meta = config.deployment_meta();
        assert_eq!(meta.revision, DEFAULT_REVISION);
        assert_eq!(meta.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(meta.description, "");
    }

    #[test]
    fn options_deserialize_with_partial_fields() {
        let options: DeployOptions =
            serde_json::from_str(r#"{"host": "deploy.example.com", "port": 2222}"#).unwrap();

        assert_eq!(options.host.as_deref(), Some("deploy.example.com"));
        assert_eq!(options.port, Some(2222));
        assert!(options.key.is_none());
    }
}
