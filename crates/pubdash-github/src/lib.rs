//! GitHub support for pubdash.
//!
//! Fetches repository statistics and contributor lists from the GitHub REST
//! API for packages whose metadata links to a GitHub repository.

pub mod client;
pub mod types;

pub use client::{GITHUB_API_URL, GitHubHost, repo_url};
