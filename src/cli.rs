use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the shipstage deploy tool.
///
/// The transfer options (`--host`, `--user`, `--remote-path`, `--key`) are
/// mandatory for a deployment but deliberately not enforced by the parser;
/// configuration resolution checks them in a fixed order and reports the
/// first one missing.
#[derive(Parser, Debug)]
#[clap(
    name = "shipstage",
    about = "Deploy build artifacts over SFTP and record the deployment with GitHub"
)]
pub struct Args {
    /// Remote host that receives the artifacts
    #[clap(long)]
    pub host: Option<String>,

    /// SSH port on the remote host (default: 22)
    #[clap(long, default_value = "22")]
    pub port: u16,

    /// User to authenticate as
    #[clap(long)]
    pub user: Option<String>,

    /// Path to the private key used for authentication
    #[clap(short, long)]
    pub key: Option<PathBuf>,

    /// Remote directory the artifacts are written to
    #[clap(long)]
    pub remote_path: Option<String>,

    /// Revision reported to GitHub (default: snapshot)
    #[clap(long)]
    pub revision: Option<String>,

    /// Environment reported to GitHub (default: production)
    #[clap(long)]
    pub environment: Option<String>,

    /// Description attached to the GitHub deployment
    #[clap(long)]
    pub description: Option<String>,

    /// Project manifest holding the repository URL (default: package.json)
    #[clap(short, long)]
    pub manifest: Option<PathBuf>,

    /// Token enabling GitHub notifications (falls back to $GITHUB_TOKEN)
    #[clap(long)]
    pub github_token: Option<String>,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Build artifacts to deploy, in order
    #[clap(required = true)]
    pub artifacts: Vec<PathBuf>,
}
