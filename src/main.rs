use std::env;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tokio::runtime::Runtime;

use shipstage::cli::Args;
use shipstage::config::{DeployConfig, DeployOptions};
use shipstage::constants::GITHUB_TOKEN_ENV_VAR;
use shipstage::github::GithubClient;
use shipstage::pipeline::{Artifact, DeployStage};
use shipstage::transfer::SftpTransport;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    let config = resolve_config(&args)?;
    info!(
        "Deploying {} artifact(s) to {}:{} as {}",
        args.artifacts.len(),
        config.host,
        config.port,
        config.user
    );

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;
    let failed = runtime.block_on(run_deploy(&args, config))?;

    if failed > 0 {
        return Err(anyhow!("{} artifact(s) failed to deploy", failed));
    }

    info!("All artifacts deployed");
    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Build deploy options from the command line and the environment
fn resolve_config(args: &Args) -> Result<DeployConfig> {
    let github_token = args
        .github_token
        .clone()
        .or_else(|| env::var(GITHUB_TOKEN_ENV_VAR).ok());

    let options = DeployOptions {
        host: args.host.clone(),
        port: Some(args.port),
        user: args.user.clone(),
        remote_path: args.remote_path.clone(),
        key: args.key.clone(),
        revision: args.revision.clone(),
        environment: args.environment.clone(),
        description: args.description.clone(),
        manifest_path: args.manifest.clone(),
        github_token,
    };

    Ok(DeployConfig::resolve(&options)?)
}

/// Deploy every artifact in order and return the number of failures
async fn run_deploy(args: &Args, config: DeployConfig) -> Result<usize> {
    let notifier = match &config.github_token {
        Some(token) => Some(GithubClient::new(token.clone())?),
        None => {
            info!("No GitHub token configured, skipping deployment notification");
            None
        }
    };
    let transport = SftpTransport::new(config.sftp_config());
    let stage = DeployStage::new(config, notifier, transport);

    let mut failed = 0usize;
    for path in &args.artifacts {
        let outcome = match Artifact::from_path(path) {
            Ok(artifact) => stage.deploy(artifact).await,
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            error!("Failed to deploy {}: {}", path.display(), e);
            failed += 1;
        }
    }

    Ok(failed)
}
