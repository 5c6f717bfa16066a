use crate::constants::DEFAULT_DEPLOYMENT_ID;

/// Deployment identity shared by every artifact of one invocation.
///
/// Until a notification succeeds the record carries the placeholder id, so
/// artifacts shipped without a token still get a recognizable suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    /// Identifier artifact names are tagged with.
    pub id: String,
    /// Whether GitHub has acknowledged this deployment.
    pub notified: bool,
}

impl Default for DeploymentRecord {
    fn default() -> Self {
        Self {
            id: DEFAULT_DEPLOYMENT_ID.to_string(),
            notified: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_placeholder_id_and_unnotified() {
        let record = DeploymentRecord::default();
        assert_eq!(record.id, DEFAULT_DEPLOYMENT_ID);
        assert!(!record.notified);
    }
}
