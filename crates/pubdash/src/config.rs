use pubdash_core::HttpConfig;
use pubdash_core::http::DEFAULT_TIMEOUT_SECS;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Root configuration for a dashboard run.
///
/// Built from command-line flags by the binary, but deserializable so
/// library callers can provide it from any source. All fields use the same
/// defaults as the CLI.
///
/// # Examples
///
/// ```
/// use pubdash::config::{DashboardConfig, SortField, SortMode};
///
/// let json = r#"{
///     "packages": ["http", "dio"],
///     "sort_field": "pubLikes",
///     "sort_mode": "desc"
/// }"#;
///
/// let config: DashboardConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.sort_field, SortField::PubLikes);
/// assert_eq!(config.sort_mode, SortMode::Desc);
/// assert_eq!(config.filename.to_str(), Some("README.md"));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Repository-host credential, forwarded as a bearer token.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_filename")]
    pub filename: PathBuf,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default)]
    pub sort_field: SortField,
    #[serde(default)]
    pub sort_mode: SortMode,
    #[serde(default)]
    pub network: NetworkConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            token: None,
            filename: default_filename(),
            publishers: Vec::new(),
            packages: Vec::new(),
            sort_field: SortField::default(),
            sort_mode: SortMode::default(),
            network: NetworkConfig::default(),
        }
    }
}

/// Upstream endpoints and transport settings.
///
/// # Defaults
///
/// - `registry_url`: `https://pub.dev`
/// - `github_api_url`: `https://api.github.com`
/// - `timeout_secs`: `30`
/// - `require_https`: `true`
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_registry_url")]
    pub registry_url: String,
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_true")]
    pub require_https: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            registry_url: default_registry_url(),
            github_api_url: default_github_api_url(),
            timeout_secs: default_timeout_secs(),
            require_https: true,
        }
    }
}

impl NetworkConfig {
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout_secs: self.timeout_secs,
            require_https: self.require_https,
        }
    }
}

/// Field the dashboard rows are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    /// Latest publish time; ascending puts the most recent release first.
    Published,
    PubLikes,
    PubDownloads,
    GithubStars,
}

impl SortField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Published,
        Self::PubLikes,
        Self::PubDownloads,
        Self::GithubStars,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Published => "published",
            Self::PubLikes => "pubLikes",
            Self::PubDownloads => "pubDownloads",
            Self::GithubStars => "githubStars",
        }
    }

    /// Parses a CLI value, falling back to [`SortField::Name`] for unknown input.
    pub fn parse_or_default(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value.trim())
            .unwrap_or_else(|| {
                tracing::warn!("unknown sort field {:?}, sorting by name", value);
                Self::Name
            })
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Asc,
    Desc,
}

impl SortMode {
    /// Parses a CLI value; anything other than `desc` means ascending.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim() {
            "desc" => Self::Desc,
            "asc" => Self::Asc,
            other => {
                tracing::warn!("unknown sort mode {:?}, using asc", other);
                Self::Asc
            }
        }
    }
}

fn default_filename() -> PathBuf {
    PathBuf::from("README.md")
}

fn default_registry_url() -> String {
    pubdash_pub::PUB_DEV_URL.to_string()
}

fn default_github_api_url() -> String {
    pubdash_github::GITHUB_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}
