//! Typed pub.dev API response schemas.
//!
//! Every field pub.dev may omit is `Option` or `#[serde(default)]`, so a
//! sparse response still decodes.

use pubdash_core::{PackageInfo, ScoreInfo};
use serde::Deserialize;

/// Tag key whose values list supported platforms.
const PLATFORM_TAG: &str = "platform";

/// Response of `GET /api/packages/<name>`.
#[derive(Debug, Deserialize)]
pub struct PackageResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latest: Option<LatestRelease>,
}

/// The `latest` object of a package response.
#[derive(Debug, Default, Deserialize)]
pub struct LatestRelease {
    #[serde(default)]
    pub pubspec: Pubspec,
    #[serde(default)]
    pub published: Option<String>,
}

/// Subset of the pubspec pubdash uses.
#[derive(Debug, Default, Deserialize)]
pub struct Pubspec {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub issue_tracker: Option<String>,
}

impl PackageResponse {
    /// Converts to [`PackageInfo`]; `None` when the canonical name is absent.
    pub fn into_info(self) -> Option<PackageInfo> {
        let name = self.name.filter(|n| !n.is_empty())?;
        let latest = self.latest.unwrap_or_default();
        let pubspec = latest.pubspec;

        Some(PackageInfo {
            name,
            version: pubspec.version.unwrap_or_default(),
            description: pubspec.description.unwrap_or_default(),
            homepage: pubspec.homepage.unwrap_or_default(),
            repository_url: pubspec.repository.unwrap_or_default(),
            issue_tracker_url: pubspec.issue_tracker.unwrap_or_default(),
            published_at: latest.published.unwrap_or_default(),
        })
    }
}

/// Response of `GET /api/packages/<name>/score`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    #[serde(default)]
    pub granted_points: Option<u64>,
    #[serde(default)]
    pub max_points: Option<u64>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub download_count_30_days: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ScoreResponse {
    pub fn into_score(self) -> ScoreInfo {
        ScoreInfo {
            granted_points: self.granted_points.unwrap_or_default(),
            max_points: self.max_points.unwrap_or_default(),
            like_count: self.like_count.unwrap_or_default(),
            download_count_30_days: self.download_count_30_days.unwrap_or_default(),
            platforms: platform_tags(&self.tags),
        }
    }
}

/// Extracts the values of `platform:<value>` tags, keeping order and duplicates.
pub fn platform_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .filter_map(|tag| tag.split_once(':'))
        .filter(|(key, _)| *key == PLATFORM_TAG)
        .map(|(_, value)| value.to_string())
        .collect()
}

/// One page of `GET /api/search?q=publisher:<name>&page=<n>`.
#[derive(Debug, Deserialize)]
pub struct PublisherPage {
    #[serde(default)]
    pub packages: Vec<PublisherEntry>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PublisherEntry {
    #[serde(default)]
    pub package: String,
}
