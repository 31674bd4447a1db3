//! Aggregated per-package data.
//!
//! A [`PackageRecord`] is assembled once per requested package name, then
//! handed to the sorter and renderer unchanged.

/// Whether a requested name could be found on the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveCode {
    Resolved,
    #[default]
    Unresolved,
}

/// Latest-release metadata returned by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub homepage: String,
    pub repository_url: String,
    pub issue_tracker_url: String,
    /// ISO-8601 timestamp, compared lexicographically.
    pub published_at: String,
}

/// Quality-score data for a package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreInfo {
    pub granted_points: u64,
    pub max_points: u64,
    pub like_count: u64,
    pub download_count_30_days: u64,
    /// Values of every `platform:<value>` tag, in order of appearance.
    pub platforms: Vec<String>,
}

/// Owner/repository pair on the repository host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// `owner/name` path used in host URLs and badges.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Repository statistics from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoMeta {
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    /// License display name; `None` when the host reports no license.
    pub license: Option<String>,
    /// Raw length of the first contributor page (at most 100).
    pub contributor_count: usize,
}

/// A contributor shown in the avatar grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub id: u64,
    pub login: String,
    pub profile_url: String,
}

impl Contributor {
    /// Avatar URL derived from the numeric account id.
    ///
    /// The API-provided avatar URL may point at a private location, the
    /// id-based one never does.
    pub fn avatar_url(&self) -> String {
        format!("https://avatars.githubusercontent.com/u/{}?v=4", self.id)
    }
}

/// Top contributors plus the raw size of the contributor page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contributors {
    pub top: Vec<Contributor>,
    pub total: usize,
}

/// One row of the dashboard.
///
/// # Examples
///
/// ```
/// use pubdash_core::{PackageRecord, ResolveCode};
///
/// let record = PackageRecord::unresolved("missing_pkg");
/// assert_eq!(record.code, ResolveCode::Unresolved);
/// assert_eq!(record.name, "missing_pkg");
/// assert!(record.repo.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageRecord {
    pub code: ResolveCode,
    pub name: String,
    pub version: String,
    pub description: String,
    pub homepage: String,
    pub repository_url: String,
    pub issue_tracker_url: String,
    pub published_at: String,
    /// Set only when one of the URL fields points at the repository host.
    pub repo: Option<RepoRef>,
    pub score: ScoreInfo,
    pub repo_meta: RepoMeta,
    /// At most three individual-user contributors, in host ranking order.
    pub top_contributors: Vec<Contributor>,
}

impl PackageRecord {
    /// Record for a name the registry could not resolve. Everything but the
    /// requested name stays empty.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            code: ResolveCode::Unresolved,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Resolved record built from registry metadata.
    pub fn resolved(info: PackageInfo) -> Self {
        Self {
            code: ResolveCode::Resolved,
            name: info.name,
            version: info.version,
            description: info.description,
            homepage: info.homepage,
            repository_url: info.repository_url,
            issue_tracker_url: info.issue_tracker_url,
            published_at: info.published_at,
            ..Self::default()
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.code == ResolveCode::Resolved
    }

    /// Candidate URLs for repository lookup, in priority order.
    pub fn link_candidates(&self) -> [&str; 3] {
        [
            self.repository_url.as_str(),
            self.issue_tracker_url.as_str(),
            self.homepage.as_str(),
        ]
    }
}
