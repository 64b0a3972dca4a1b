//! # Hosting API Client
//!
//! A thin client over the repository-hosting REST API: repository
//! metadata, directory listings, and raw file content. The base URL is
//! injectable so tests can point the client at a mock server.

use crate::types::{GitHubError, TreeEntry};
use gitscribe::Repository;
use reqwest::header;
use reqwest::{Client as ReqwestClient, RequestBuilder};
use tracing::debug;

/// The production hosting API address.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "gitscribe-app";

/// The client for the repository-hosting API.
#[derive(Clone, Debug)]
pub struct GitHubClient {
    client: ReqwestClient,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Creates a new `GitHubClient`.
    ///
    /// When a token is provided it is sent as `Authorization: token {..}`
    /// on every API call; raw content downloads go out unauthenticated.
    pub fn new(base_url: String, token: Option<String>) -> Result<Self, GitHubError> {
        let client = ReqwestClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(GitHubError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    fn api_get(&self, url: &str) -> RequestBuilder {
        let mut request_builder = self.client.get(url).header(header::ACCEPT, ACCEPT_HEADER);
        if let Some(token) = &self.token {
            request_builder = request_builder.header(header::AUTHORIZATION, format!("token {token}"));
        }
        request_builder
    }

    /// Fetches the metadata descriptor for a repository.
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, GitHubError> {
        let url = format!("{}/repos/{owner}/{repo}", self.base_url);
        debug!("Fetching repository metadata from {url}");

        let response = self.api_get(&url).send().await?;
        if !response.status().is_success() {
            return Err(GitHubError::RepositoryFetch(response.status().to_string()));
        }

        Ok(response.json().await?)
    }

    /// Lists the entries of one directory within a repository.
    ///
    /// `path` is relative to the repository root; the empty string lists
    /// the root itself.
    pub async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<TreeEntry>, GitHubError> {
        let url = format!("{}/repos/{owner}/{repo}/contents/{path}", self.base_url);
        debug!("Listing directory contents from {url}");

        let response = self.api_get(&url).send().await?;
        if !response.status().is_success() {
            return Err(GitHubError::ContentsFetch(response.status().to_string()));
        }

        Ok(response.json().await?)
    }

    /// Retrieves the raw text content behind a listing entry's download URL.
    pub async fn get_file_content(&self, download_url: &str) -> Result<String, GitHubError> {
        let response = self.client.get(download_url).send().await?;
        if !response.status().is_success() {
            return Err(GitHubError::ContentFetch(response.status().to_string()));
        }

        Ok(response.text().await?)
    }
}
