//! GitHub REST API client.
//!
//! Uses two endpoints:
//! - `GET /repos/{owner}/{repo}` for stars, forks, open issues and license
//! - `GET /repos/{owner}/{repo}/contributors?page=1&per_page=100` for avatars
//!
//! A token, when configured, is forwarded as a bearer token on every request.
//! Without one the requests go out unauthenticated and are rate-limited.

use crate::types::{ContributorEntry, RepoResponse, top_users};
use pubdash_core::{Contributors, HttpClient, RepoMeta, RepoRef, RepositoryHost, Result};
use reqwest::RequestBuilder;

/// Base URL of the public GitHub REST API.
pub const GITHUB_API_URL: &str = "https://api.github.com";

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// Contributors requested per page; only the first page is read.
pub const CONTRIBUTORS_PER_PAGE: usize = 100;

/// Returns the URL for a repository's page on github.com.
pub fn repo_url(repo: &RepoRef) -> String {
    format!("https://github.com/{}", repo.slug())
}

/// GitHub implementation of [`RepositoryHost`].
#[derive(Debug, Clone)]
pub struct GitHubHost {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl GitHubHost {
    /// Creates a client for api.github.com. Empty tokens are ignored.
    pub fn new(http: HttpClient, token: Option<String>) -> Self {
        Self::with_base_url(http, GITHUB_API_URL, token)
    }

    pub fn with_base_url(http: HttpClient, base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    fn repo_api_url(&self, repo: &RepoRef) -> String {
        format!(
            "{}/repos/{}/{}",
            self.base_url,
            urlencoding::encode(&repo.owner),
            urlencoding::encode(&repo.name)
        )
    }

    fn decorate(request: RequestBuilder) -> RequestBuilder {
        request
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header(API_VERSION_HEADER, API_VERSION)
    }
}

#[async_trait::async_trait]
impl RepositoryHost for GitHubHost {
    async fn fetch_repo_meta(&self, repo: &RepoRef) -> Result<RepoMeta> {
        let url = self.repo_api_url(repo);
        let response: RepoResponse = self
            .http
            .get_json_with(&url, self.token.as_deref(), Self::decorate)
            .await?;
        Ok(response.into_meta())
    }

    async fn fetch_contributors(&self, repo: &RepoRef) -> Result<Contributors> {
        let url = format!(
            "{}/contributors?page=1&per_page={}",
            self.repo_api_url(repo),
            CONTRIBUTORS_PER_PAGE
        );
        let entries: Vec<ContributorEntry> = self
            .http
            .get_json_with(&url, self.token.as_deref(), Self::decorate)
            .await?;

        tracing::debug!("{}: {} contributors on first page", repo.slug(), entries.len());

        Ok(Contributors {
            top: top_users(&entries),
            total: entries.len(),
        })
    }
}
