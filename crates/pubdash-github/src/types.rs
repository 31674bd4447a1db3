//! Typed GitHub REST API response schemas.

use pubdash_core::{Contributor, RepoMeta};
use serde::Deserialize;

/// Maximum number of contributors shown per repository.
pub const TOP_CONTRIBUTORS: usize = 3;

/// Account type of an individual (non-bot, non-organization) user.
const USER_ACCOUNT: &str = "User";

/// Response of `GET /repos/<owner>/<repo>`.
#[derive(Debug, Deserialize)]
pub struct RepoResponse {
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub license: Option<License>,
}

#[derive(Debug, Deserialize)]
pub struct License {
    #[serde(default)]
    pub name: Option<String>,
}

impl RepoResponse {
    pub fn into_meta(self) -> RepoMeta {
        RepoMeta {
            stars: self.stargazers_count,
            forks: self.forks_count,
            open_issues: self.open_issues_count,
            license: self
                .license
                .and_then(|l| l.name)
                .filter(|name| !name.is_empty()),
            contributor_count: 0,
        }
    }
}

/// One entry of `GET /repos/<owner>/<repo>/contributors`.
#[derive(Debug, Deserialize)]
pub struct ContributorEntry {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub html_url: String,
    #[serde(default, rename = "type")]
    pub account_type: String,
}

impl ContributorEntry {
    pub fn is_user(&self) -> bool {
        self.account_type == USER_ACCOUNT
    }
}

/// Keeps the first [`TOP_CONTRIBUTORS`] individual users, in API order.
pub fn top_users(entries: &[ContributorEntry]) -> Vec<Contributor> {
    entries
        .iter()
        .filter(|entry| entry.is_user())
        .take(TOP_CONTRIBUTORS)
        .map(|entry| Contributor {
            id: entry.id,
            login: entry.login.clone(),
            profile_url: entry.html_url.clone(),
        })
        .collect()
}
