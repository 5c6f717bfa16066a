//! The deploy stage: notify once, tag the file name, ship the bytes.

use log::{debug, info};
use tokio::sync::Mutex;

use crate::config::DeployConfig;
use crate::errors::DeployError;
use crate::github::DeploymentNotifier;
use crate::manifest;
use crate::pipeline::{tagged_file_name, Artifact, DeploymentRecord};
use crate::transfer::ArtifactTransport;

/// Outcome of one successfully deployed artifact.
#[derive(Debug, Clone)]
pub struct Deployed {
    /// The artifact as it entered the stage.
    pub artifact: Artifact,
    /// File name the artifact was stored under remotely.
    pub remote_name: String,
    /// Deployment id the name was tagged with.
    pub deployment_id: String,
}

/// Deploy stage wiring a notifier and a transport together.
///
/// The stage notifies GitHub at most once per invocation, before the first
/// artifact is shipped; every artifact then carries the same deployment id
/// in its file name. A failed notification drops the artifact that
/// triggered it and leaves the record unnotified, so the next artifact
/// tries again.
pub struct DeployStage<N, T> {
    config: DeployConfig,
    notifier: Option<N>,
    transport: T,
    record: Mutex<DeploymentRecord>,
}

impl<N, T> DeployStage<N, T>
where
    N: DeploymentNotifier,
    T: ArtifactTransport,
{
    /// Create a stage. Passing `None` for the notifier turns the
    /// notification step into a pass-through.
    pub fn new(config: DeployConfig, notifier: Option<N>, transport: T) -> Self {
        Self {
            config,
            notifier,
            transport,
            record: Mutex::new(DeploymentRecord::default()),
        }
    }

    /// Deploy one artifact.
    ///
    /// Resolves the deployment id (notifying GitHub if that has not
    /// happened yet), tags the file name with it and uploads the bytes
    /// unchanged.
    pub async fn deploy(&self, artifact: Artifact) -> Result<Deployed, DeployError> {
        let deployment_id = self.resolve_deployment_id().await?;
        let remote_name = tagged_file_name(&artifact.name, &deployment_id);

        debug!(
            "Uploading {} ({} bytes) as {}",
            artifact.name,
            artifact.len(),
            remote_name
        );
        self.transport
            .upload(&remote_name, &artifact.contents)
            .await?;
        info!("Deployed {} as {}", artifact.name, remote_name);

        Ok(Deployed {
            artifact,
            remote_name,
            deployment_id,
        })
    }

    /// Deploy a stream of artifacts in order.
    ///
    /// One failing artifact does not stop the rest; every artifact gets its
    /// own result, in input order.
    pub async fn deploy_all(&self, artifacts: Vec<Artifact>) -> Vec<Result<Deployed, DeployError>> {
        let mut outcomes = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            outcomes.push(self.deploy(artifact).await);
        }
        outcomes
    }

    /// Snapshot of the shared deployment record.
    pub async fn deployment_record(&self) -> DeploymentRecord {
        self.record.lock().await.clone()
    }

    /// Return the deployment id all artifacts of this invocation share,
    /// notifying GitHub first if a notifier is present and has not
    /// succeeded yet.
    ///
    /// The record lock is held across the notification so concurrent
    /// artifacts cannot race into a second API call.
    async fn resolve_deployment_id(&self) -> Result<String, DeployError> {
        let mut record = self.record.lock().await;
        if record.notified {
            return Ok(record.id.clone());
        }

        let notifier = match &self.notifier {
            Some(notifier) => notifier,
            None => return Ok(record.id.clone()),
        };

        let target = manifest::github_repo_from_manifest(&self.config.manifest_path)?;
        let meta = self.config.deployment_meta();
        let id = notifier.create_deployment(&target, &meta).await?;
        info!("Deployment {} created", id);

        record.id = id.clone();
        record.notified = true;
        Ok(id)
    }
}
