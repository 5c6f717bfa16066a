use async_trait::async_trait;

use crate::errors::DeployError;
use crate::manifest::RepoTarget;

/// Details recorded with a deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentMeta {
    pub revision: String,
    pub environment: String,
    pub description: String,
}

/// A trait for services that record a deployment before artifacts move.
///
/// The deploy stage talks to GitHub through this seam, which also lets
/// tests inject a canned notifier.
#[async_trait]
pub trait DeploymentNotifier: Send + Sync {
    /// Record a deployment of `target` and return its identifier.
    async fn create_deployment(
        &self,
        target: &RepoTarget,
        meta: &DeploymentMeta,
    ) -> Result<String, DeployError>;
}
