//! Project manifest loading and repository URL parsing.
//!
//! The deployment notifier needs to know which GitHub repository a build
//! belongs to. That information comes from the project manifest (by
//! convention `package.json` in the working directory), whose `repository`
//! field carries a URL of the form `<host>:<owner>/<repo>[.git]`.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::errors::DeployError;

/// A GitHub repository addressed by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    pub owner: String,
    pub repo: String,
}

/// The subset of a project manifest the pipeline cares about.
#[derive(Debug, Deserialize)]
struct ProjectManifest {
    #[serde(default)]
    repository: Option<RepositoryField>,
}

/// The `repository` field appears either as a plain URL string or as an
/// object with a `url` member.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RepositoryField {
    Detailed { url: String },
    Plain(String),
}

impl RepositoryField {
    fn url(&self) -> &str {
        match self {
            RepositoryField::Detailed { url } => url,
            RepositoryField::Plain(url) => url,
        }
    }
}

/// Determine the GitHub repository recorded in the manifest at `path`.
///
/// Fails with [`DeployError::RepositoryNotFound`] when the manifest cannot
/// be read or does not point at GitHub, and with
/// [`DeployError::RepositoryParse`] when the URL cannot be split into an
/// owner and a repository name.
pub fn github_repo_from_manifest(path: &Path) -> Result<RepoTarget, DeployError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        DeployError::RepositoryNotFound(format!("cannot read manifest {}: {}", path.display(), e))
    })?;
    let manifest: ProjectManifest = serde_json::from_str(&raw).map_err(|e| {
        DeployError::RepositoryNotFound(format!("cannot parse manifest {}: {}", path.display(), e))
    })?;

    let url = match &manifest.repository {
        Some(repository) => repository.url(),
        None => {
            return Err(DeployError::RepositoryNotFound(format!(
                "no repository URL in {}",
                path.display()
            )))
        }
    };

    debug!("Manifest {} points at {}", path.display(), url);
    parse_github_url(url)
}

/// Split a `<host>:<owner>/<repo>[.git]` URL into owner and repository.
pub fn parse_github_url(url: &str) -> Result<RepoTarget, DeployError> {
    if !url.contains("github") {
        return Err(DeployError::RepositoryNotFound(format!(
            "repository `{}` is not on GitHub",
            url
        )));
    }

    let location = match url.split_once(':') {
        Some((_, location)) => location,
        None => return Err(DeployError::RepositoryParse(url.to_string())),
    };

    let mut segments = location.split('/');
    let owner = segments.next().unwrap_or_default();
    let repo = segments
        .next()
        .unwrap_or_default()
        .split('.')
        .next()
        .unwrap_or_default();

    if owner.is_empty() || repo.is_empty() {
        return Err(DeployError::RepositoryParse(url.to_string()));
    }

    Ok(RepoTarget {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use crate::constants::test::{TEST_REPO_NAME, TEST_REPO_OWNER};

    fn manifest_with(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_repository_object_form() {
        let (_dir, path) = manifest_with(
            r#"{
                "name": "testpackage",
                "repository": {
                    "type": "git",
                    "url": "git@github.com:testuser/testrepo.git"
                }
            }"#,
        );

        let target = github_repo_from_manifest(&path).unwrap();
        assert_eq!(target.owner, TEST_REPO_OWNER);
        assert_eq!(target.repo, TEST_REPO_NAME);
    }

    #[test]
    fn reads_repository_string_form() {
        let (_dir, path) =
            manifest_with(r#"{"repository": "git@github.com:testuser/testrepo"}"#);

        let target = github_repo_from_manifest(&path).unwrap();
        assert_eq!(target.owner, TEST_REPO_OWNER);
        assert_eq!(target.repo, TEST_REPO_NAME);
    }

    #[test]
    fn missing_manifest_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = github_repo_from_manifest(&dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, DeployError::RepositoryNotFound(_)));
    }

    #[test]
    fn manifest_without_repository_is_not_found() {
        let (_dir, path) = manifest_with(r#"{"name": "testpackage", "version": "1.0.0"}"#);
        let err = github_repo_from_manifest(&path).unwrap_err();
        assert!(matches!(err, DeployError::RepositoryNotFound(_)));
    }

    #[test]
    fn unparsable_manifest_is_not_found() {
        let (_dir, path) = manifest_with("not json at all");
        let err = github_repo_from_manifest(&path).unwrap_err();
        assert!(matches!(err, DeployError::RepositoryNotFound(_)));
    }

    #[test]
    fn repository_off_github_is_not_found() {
        let err = parse_github_url("git@gitlab.com:someuser/somerepo.git").unwrap_err();
        assert!(matches!(err, DeployError::RepositoryNotFound(_)));
    }

    #[test]
    fn url_without_colon_fails_to_parse() {
        let err = parse_github_url("github.com/testuser/testrepo").unwrap_err();
        assert!(matches!(err, DeployError::RepositoryParse(_)));
    }

    #[test]
    fn url_missing_owner_or_repo_fails_to_parse() {
        assert!(matches!(
            parse_github_url("git@github.com:/testrepo"),
            Err(DeployError::RepositoryParse(_))
        ));
        assert!(matches!(
            parse_github_url("git@github.com:testuser"),
            Err(DeployError::RepositoryParse(_))
        ));
    }

    #[test]
    fn web_urls_fail_to_parse() {
        // Browser URLs have nothing before the first path segment once the
        // scheme is cut off, so they are rejected rather than misread.
        let err = parse_github_url("https://github.com/testuser/testrepo").unwrap_err();
        assert!(matches!(err, DeployError::RepositoryParse(_)));
    }

    #[test]
    fn trailing_git_suffix_is_stripped() {
        let target = parse_github_url("git@github.com:testuser/testrepo.git").unwrap();
        assert_eq!(target.repo, TEST_REPO_NAME);
    }
}
