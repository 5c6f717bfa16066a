//! The deploy pipeline stage.
//!
//! Artifacts pass through three steps: an optional one-shot GitHub
//! notification, a rename that tags the file name with the deployment id,
//! and the transfer to the remote target. [`DeployStage`] wires the steps
//! together around a shared [`DeploymentRecord`].

mod artifact;
mod record;
mod rename;
mod stage;

pub use artifact::Artifact;
pub use record::DeploymentRecord;
pub use rename::tagged_file_name;
pub use stage::{Deployed, DeployStage};
