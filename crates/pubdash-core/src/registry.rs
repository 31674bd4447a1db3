use crate::error::Result;
use crate::record::{Contributors, PackageInfo, RepoMeta, RepoRef, ScoreInfo};
use async_trait::async_trait;

/// Package registry interface.
///
/// Implementors report failures through `Result`; deciding whether a failure
/// aborts anything is left to the caller.
///
/// # Examples
///
/// ```no_run
/// use pubdash_core::{PackageInfo, PackageRegistry, ScoreInfo};
/// use async_trait::async_trait;
///
/// struct EmptyRegistry;
///
/// #[async_trait]
/// impl PackageRegistry for EmptyRegistry {
///     async fn fetch_package(&self, _name: &str) -> pubdash_core::Result<Option<PackageInfo>> {
///         Ok(None)
///     }
///
///     async fn fetch_score(&self, _name: &str) -> pubdash_core::Result<ScoreInfo> {
///         Ok(ScoreInfo::default())
///     }
///
///     async fn list_publisher_packages(&self, _publisher: &str) -> pubdash_core::Result<Vec<String>> {
///         Ok(vec![])
///     }
/// }
/// ```
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Looks up a package by exact name.
    ///
    /// Returns `Ok(None)` when the registry has no such package.
    async fn fetch_package(&self, name: &str) -> Result<Option<PackageInfo>>;

    /// Fetches quality-score data for a package.
    async fn fetch_score(&self, name: &str) -> Result<ScoreInfo>;

    /// Lists every package owned by a publisher, deduplicated.
    ///
    /// An empty publisher name yields an empty list without any request.
    async fn list_publisher_packages(&self, publisher: &str) -> Result<Vec<String>>;
}

/// Repository host interface.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Fetches star/fork/issue counts and license.
    async fn fetch_repo_meta(&self, repo: &RepoRef) -> Result<RepoMeta>;

    /// Fetches the first contributor page and keeps the top three users.
    async fn fetch_contributors(&self, repo: &RepoRef) -> Result<Contributors>;
}
