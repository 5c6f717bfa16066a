//! GitHub deployments API client.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::header;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEPLOYMENT_TASK, GITHUB_ACCEPT_HEADER, GITHUB_API_BASE_URL, HTTP_TIMEOUT_SECS, HTTP_USER_AGENT,
};
use crate::errors::DeployError;
use crate::github::{DeploymentMeta, DeploymentNotifier};
use crate::manifest::RepoTarget;

/// Client for the create-deployment endpoint of the GitHub REST API.
pub struct GithubClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    /// Create a client against the public GitHub API.
    pub fn new(token: impl Into<String>) -> Result<Self, DeployError> {
        Self::with_base_url(token, GITHUB_API_BASE_URL)
    }

    /// Create a client against a custom API root, e.g. a GitHub Enterprise
    /// instance or a stub server in tests.
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, DeployError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(HTTP_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl DeploymentNotifier for GithubClient {
    async fn create_deployment(
        &self,
        target: &RepoTarget,
        meta: &DeploymentMeta,
    ) -> Result<String, DeployError> {
        let url = format!(
            "{}/repos/{}/{}/deployments",
            self.base_url, target.owner, target.repo
        );
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("token {}", self.token))
            .header(header::ACCEPT, GITHUB_ACCEPT_HEADER)
            .json(&CreateDeployment::from_meta(meta))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("GitHub deployment creation failed: {} - {}", status, body);
            return Err(DeployError::Notification(format!("{}: {}", status, body)));
        }

        let created: CreatedDeployment = response.json().await?;
        debug!("GitHub acknowledged deployment {}", created.id);
        Ok(created.id.to_string())
    }
}

/// Body of the create-deployment call.
///
/// `required_contexts` stays empty so the deployment is recorded even when
/// commit statuses are missing or red.
#[derive(Debug, Serialize)]
struct CreateDeployment<'a> {
    task: &'a str,
    auto_merge: bool,
    required_contexts: &'a [&'a str],
    r#ref: &'a str,
    environment: &'a str,
    description: &'a str,
}

impl<'a> CreateDeployment<'a> {
    fn from_meta(meta: &'a DeploymentMeta) -> Self {
        Self {
            task: DEPLOYMENT_TASK,
            auto_merge: false,
            required_contexts: &[],
            r#ref: &meta.revision,
            environment: &meta.environment,
            description: &meta.description,
        }
    }
}

/// The slice of the response the pipeline cares about.
#[derive(Debug, Deserialize)]
struct CreatedDeployment {
    id: DeploymentId,
}

/// GitHub has returned deployment ids both as JSON numbers and as strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeploymentId {
    Number(u64),
    Text(String),
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentId::Number(id) => write!(f, "{}", id),
            DeploymentId::Text(id) => f.write_str(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> DeploymentMeta {
        DeploymentMeta {
            revision: "snapshot".to_string(),
            environment: "production".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn request_body_matches_the_deployments_endpoint() {
        let body = serde_json::to_value(CreateDeployment::from_meta(&meta())).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "task": "deploy",
                "auto_merge": false,
                "required_contexts": [],
                "ref": "snapshot",
                "environment": "production",
                "description": ""
            })
        );
    }

    #[test]
    fn deployment_ids_parse_from_numbers_and_strings() {
        let numeric: CreatedDeployment = serde_json::from_str(r#"{"id": 1234}"#).unwrap();
        assert_eq!(numeric.id.to_string(), "1234");

        let text: CreatedDeployment = serde_json::from_str(r#"{"id": "1234"}"#).unwrap();
        assert_eq!(text.id.to_string(), "1234");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = GithubClient::with_base_url("testToken", "https://api.github.com/").unwrap();
        assert_eq!(client.base_url, "https://api.github.com");
    }
}
