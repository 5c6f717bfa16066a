// Re-export all items from the submodules
mod deploy;

pub use deploy::{DeployConfig, DeployOptions};
