//! Command-line flags.
//!
//! Flag spellings follow the dashboard's established workflow files
//! (`--publisherList`, `--sortField`, ...), so existing scheduled jobs keep
//! working unchanged.

use crate::config::{DashboardConfig, NetworkConfig, SortField, SortMode};
use crate::names::split_list;
use clap::Parser;
use pubdash_core::http::DEFAULT_TIMEOUT_SECS;
use std::path::PathBuf;

/// Refresh a pub.dev package dashboard inside a Markdown document
#[derive(Parser, Debug)]
#[command(name = "pubdash", author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub token, sent as a bearer token to the GitHub API
    #[arg(long, alias = "githubToken", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Markdown file to update
    #[arg(long, default_value = "README.md")]
    pub filename: PathBuf,

    /// Comma-separated publisher names, e.g. "aa.dev,bb.dev"
    #[arg(long = "publisherList", default_value = "")]
    pub publisher_list: String,

    /// Comma-separated package names, e.g. "aa,bb,cc"
    #[arg(long = "packageList", default_value = "")]
    pub package_list: String,

    /// name | published | pubLikes | pubDownloads | githubStars
    #[arg(long = "sortField", default_value = "name")]
    pub sort_field: String,

    /// asc | desc
    #[arg(long = "sortMode", default_value = "asc")]
    pub sort_mode: String,

    /// Base URL of the package registry
    #[arg(long, default_value = pubdash_pub::PUB_DEV_URL, hide = true)]
    pub registry_url: String,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = pubdash_github::GITHUB_API_URL, hide = true)]
    pub github_api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn into_config(self) -> DashboardConfig {
        // Plain http is only ever used against local test servers.
        let require_https =
            is_https(&self.registry_url) && is_https(&self.github_api_url);

        DashboardConfig {
            token: self.token.filter(|t| !t.is_empty()),
            filename: self.filename,
            publishers: split_list(&self.publisher_list),
            packages: split_list(&self.package_list),
            sort_field: SortField::parse_or_default(&self.sort_field),
            sort_mode: SortMode::parse_or_default(&self.sort_mode),
            network: NetworkConfig {
                registry_url: self.registry_url,
                github_api_url: self.github_api_url,
                timeout_secs: self.timeout_secs,
                require_https,
            },
        }
    }
}

fn is_https(url: &str) -> bool {
    url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> DashboardConfig {
        let mut argv = vec!["pubdash"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.filename, PathBuf::from("README.md"));
        assert!(config.publishers.is_empty());
        assert!(config.packages.is_empty());
        assert_eq!(config.sort_field, SortField::Name);
        assert_eq!(config.sort_mode, SortMode::Asc);
        assert!(config.network.require_https);
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "--token",
            "ghp_x",
            "--filename",
            "docs/dash.md",
            "--publisherList",
            "fluttercandies.com, ,",
            "--packageList",
            "http, dio,http",
            "--sortField",
            "githubStars",
            "--sortMode",
            "desc",
        ]);

        assert_eq!(config.token.as_deref(), Some("ghp_x"));
        assert_eq!(config.filename, PathBuf::from("docs/dash.md"));
        assert_eq!(config.publishers, vec!["fluttercandies.com"]);
        assert_eq!(config.packages, vec!["http", "dio"]);
        assert_eq!(config.sort_field, SortField::GithubStars);
        assert_eq!(config.sort_mode, SortMode::Desc);
    }

    #[test]
    fn test_github_token_alias() {
        let config = parse(&["--githubToken", "legacy"]);
        assert_eq!(config.token.as_deref(), Some("legacy"));
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        let config = parse(&["--sortField", "downloads", "--sortMode", "sideways"]);
        assert_eq!(config.sort_field, SortField::Name);
        assert_eq!(config.sort_mode, SortMode::Asc);
    }

    #[test]
    fn test_local_endpoints_disable_https() {
        let config = parse(&[
            "--registry-url",
            "http://127.0.0.1:9000",
            "--github-api-url",
            "http://127.0.0.1:9001",
        ]);
        assert!(!config.network.require_https);
        assert_eq!(config.network.registry_url, "http://127.0.0.1:9000");
    }
}
