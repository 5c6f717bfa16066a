//! GitHub deployments API integration.
//!
//! Before the first artifact of an invocation is shipped, the pipeline can
//! record a deployment with GitHub. The [`DeploymentNotifier`] trait is the
//! seam the deploy stage talks through; [`GithubClient`] implements it
//! against the REST `deployments` endpoint.

mod client;
mod notifier;

pub use client::GithubClient;
pub use notifier::{DeploymentMeta, DeploymentNotifier};
