//! Repository link extraction.
//!
//! Registry metadata carries free-form homepage/repository/issue-tracker
//! strings. The resolver pulls an `owner/repo` pair out of the first one that
//! mentions the repository host.
//!
//! Only the first two path segments after the host are used. Query strings
//! and fragments glued to the repository segment (`repo#readme`) are kept
//! as-is; downstream output already depends on this behavior.

use crate::record::RepoRef;

/// Literal marker that identifies a repository-host URL.
pub const HOST_MARKER: &str = "github.com/";

/// Extracts `owner/repo` from a single URL-like string.
///
/// Returns `None` when the marker is absent or fewer than two non-empty
/// segments follow it. A trailing `.git` is stripped from the repository.
///
/// # Examples
///
/// ```
/// use pubdash_core::link::resolve;
///
/// let repo = resolve("https://github.com/foo/bar.git").unwrap();
/// assert_eq!((repo.owner.as_str(), repo.name.as_str()), ("foo", "bar"));
///
/// assert!(resolve("https://example.com/foo/bar").is_none());
/// assert!(resolve("https://github.com/foo").is_none());
/// ```
pub fn resolve(candidate: &str) -> Option<RepoRef> {
    let start = candidate.find(HOST_MARKER)?;
    let rest = &candidate[start + HOST_MARKER.len()..];

    let mut segments = rest.split('/');
    let owner = segments.next()?;
    let repo = segments.next()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if owner.is_empty() || repo.is_empty() {
        return None;
    }

    Some(RepoRef::new(owner, repo))
}

/// Tries each candidate in order and stops at the first match.
///
/// Order is significant: callers pass repository, issue tracker, then
/// homepage.
pub fn resolve_first<'a, I>(candidates: I) -> Option<RepoRef>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates.into_iter().find_map(resolve)
}
