use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Custom error types for the hosting API client and the extraction walk.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Request to the hosting API failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to fetch repository: {0}")]
    RepositoryFetch(String),
    #[error("Failed to fetch repository contents: {0}")]
    ContentsFetch(String),
    #[error("Failed to fetch file content: {0}")]
    ContentFetch(String),
    #[error("Invalid repository reference '{0}'. Use: owner/repo or a full GitHub URL")]
    InvalidRepoRef(String),
}

/// Type of entry in a repository directory listing.
///
/// Only `File` and `Dir` drive the extraction walk; symlinks and
/// submodules are listed by the API but skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// A single entry in a repository directory listing, as returned by the
/// hosting API's `/repos/{owner}/{repo}/contents/{path}` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEntry {
    pub name: String,
    pub path: String,
    pub sha: String,
    /// Size in bytes; 0 for directories.
    pub size: u64,
    pub url: String,
    pub html_url: String,
    pub git_url: String,
    /// Direct raw-content URL. Absent for directories and submodules.
    pub download_url: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// A parsed `owner/repo` reference.
///
/// Accepts the bare `owner/repo` form, `github.com/owner/repo`, and full
/// `http(s)://github.com/owner/repo[/...]` URLs; a trailing `.git` on the
/// repository name is stripped. Anything else is rejected synchronously,
/// before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoRef {
    type Err = GitHubError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(GitHubError::InvalidRepoRef(input.to_string()));
        }

        let without_scheme = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        let had_scheme = without_scheme.is_some();
        let rest = without_scheme.unwrap_or(trimmed);

        let without_host = rest.strip_prefix("github.com/");
        if had_scheme && without_host.is_none() {
            return Err(GitHubError::InvalidRepoRef(input.to_string()));
        }
        let had_host = without_host.is_some();
        let rest = without_host.unwrap_or(rest);

        let mut segments = rest.split('/').filter(|s| !s.is_empty());
        let owner = segments.next();
        let repo = segments.next();
        // The bare form is exactly `owner/repo`; URLs may carry extra path
        // segments (e.g. /tree/main) which are ignored.
        if !had_host && segments.next().is_some() {
            return Err(GitHubError::InvalidRepoRef(input.to_string()));
        }

        match (owner, repo) {
            (Some(owner), Some(repo)) => Ok(RepoRef {
                owner: owner.to_string(),
                repo: repo.strip_suffix(".git").unwrap_or(repo).to_string(),
            }),
            _ => Err(GitHubError::InvalidRepoRef(input.to_string())),
        }
    }
}
