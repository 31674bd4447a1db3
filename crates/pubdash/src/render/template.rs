//! Named HTML/Markdown fragments used by the table renderer.
//!
//! Every badge kind is a [`Badge`] variant; changing how a badge looks never
//! touches aggregation or row layout.

use pubdash_core::{Contributor, RepoRef};
use pubdash_github::repo_url;

/// Placeholder for a cell or line with no data.
pub const PLACEHOLDER: &str = "-";

/// Marker appended to names the registry could not resolve.
pub const UNRESOLVED_MARKER: &str = "⁉️";

/// Contributor totals at or above this are shown as `99+`.
pub const CONTRIBUTOR_CAP: usize = 100;

const SHIELDS: &str = "https://img.shields.io";

const DOWNLOAD_ICON: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCAyNCAyNCIgZmlsbD0icmdiYSgyNTUsMjU1LDI1NSwxKSI+PHBhdGggZmlsbD0ibm9uZSIgZD0iTTAgMGgyNHYyNEgweiI+PC9wYXRoPjxwYXRoIGQ9Ik0zIDE5SDIxVjIxSDNWMTlaTTEzIDEzLjE3MTZMMTkuMDcxMSA3LjEwMDVMMjAuNDg1MyA4LjUxNDcyTDEyIDE3TDMuNTE0NzIgOC41MTQ3Mkw0LjkyODkzIDcuMTAwNUwxMSAxMy4xNzE2VjJIMTNWMTMuMTcxNloiPjwvcGF0aD48L3N2Zz4=";
const POINT_ICON: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCAyNCAyNCIgZmlsbD0icmdiYSgyNTUsMjU1LDI1NSwxKSI+PHBhdGggZmlsbD0ibm9uZSIgZD0iTTAgMGgyNHYyNEgweiI+PC9wYXRoPjxwYXRoIGQ9Ik0yMyAxMkwxNS45Mjg5IDE5LjA3MTFMMTQuNTE0NyAxNy42NTY5TDIwLjE3MTYgMTJMMTQuNTE0NyA2LjM0MzE3TDE1LjkyODkgNC45Mjg5NkwyMyAxMlpNMy44Mjg0MyAxMkw5LjQ4NTI4IDE3LjY1NjlMOC4wNzEwNyAxOS4wNzExTDEgMTJMOC4wNzEwNyA0LjkyODk2TDkuNDg1MjggNi4zNDMxN0wzLjgyODQzIDEyWiI+PC9wYXRoPjwvc3ZnPg==";

/// A linked shields.io badge.
#[derive(Debug, Clone, Copy)]
pub enum Badge<'a> {
    GithubStars(&'a RepoRef),
    GithubIssues(&'a RepoRef),
    GithubPullRequests(&'a RepoRef),
    PubLikes {
        package_url: &'a str,
        name: &'a str,
    },
    PubPoints {
        package_url: &'a str,
        name: &'a str,
    },
    /// Downloads in the last 30 days, already formatted for display.
    PubDownloads {
        package_url: &'a str,
        count: &'a str,
    },
}

impl Badge<'_> {
    fn alt(&self) -> &'static str {
        match self {
            Self::GithubStars(_) => "GitHub stars",
            Self::GithubIssues(_) => "GitHub issues",
            Self::GithubPullRequests(_) => "GitHub pull requests",
            Self::PubLikes { .. } => "Pub likes",
            Self::PubPoints { .. } => "Pub points",
            Self::PubDownloads { .. } => "Pub downloads",
        }
    }

    fn image(&self) -> String {
        match self {
            Self::GithubStars(repo) => format!(
                "{}/github/stars/{}?style=social&logo=github&logoColor=1F2328&label=",
                SHIELDS,
                repo.slug()
            ),
            Self::GithubIssues(repo) => {
                format!("{}/github/issues/{}?label=", SHIELDS, repo.slug())
            }
            Self::GithubPullRequests(repo) => {
                format!("{}/github/issues-pr/{}?label=", SHIELDS, repo.slug())
            }
            Self::PubLikes { name, .. } => format!(
                "{}/pub/likes/{}?style=social&logo=flutter&logoColor=168AFD&label=",
                SHIELDS, name
            ),
            Self::PubPoints { name, .. } => format!(
                "{}/pub/points/{}?style=flat&label=&logo={}",
                SHIELDS, name, POINT_ICON
            ),
            Self::PubDownloads { count, .. } => format!(
                "{}/badge/{}{}month-4AC51C?style=flat&logo={}",
                SHIELDS,
                count,
                urlencoding::encode("/"),
                DOWNLOAD_ICON
            ),
        }
    }

    fn target(&self) -> String {
        match self {
            Self::GithubStars(repo) => repo_url(repo),
            Self::GithubIssues(repo) => format!("{}/issues", repo_url(repo)),
            Self::GithubPullRequests(repo) => format!("{}/pulls", repo_url(repo)),
            Self::PubLikes { package_url, .. } | Self::PubDownloads { package_url, .. } => {
                (*package_url).to_string()
            }
            Self::PubPoints { package_url, .. } => format!("{}/score", package_url),
        }
    }

    pub fn render(&self) -> String {
        format!("[![{}]({})]({})", self.alt(), self.image(), self.target())
    }
}

/// Avatar thumbnail sizes used in the contributor grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AvatarSize {
    Large,
    Medium,
}

impl AvatarSize {
    fn width(self) -> &'static str {
        match self {
            Self::Large => "36px",
            Self::Medium => "30px",
        }
    }
}

fn avatar(contributor: &Contributor, size: AvatarSize) -> String {
    format!(
        r#"<a href="{}"><img width="{}" src="{}" /></a>"#,
        contributor.profile_url,
        size.width(),
        contributor.avatar_url()
    )
}

fn cell(content: &str, colspan: Option<u8>) -> String {
    match colspan {
        Some(span) => format!(r#"<td colspan="{}">{}</td>"#, span, content),
        None => format!("<td>{}</td>", content),
    }
}

fn row(cells: &[String]) -> String {
    format!(r#"<tr align="center">{}</tr>"#, cells.concat())
}

/// Mini table of up to three avatars plus a link to the full contributor graph.
///
/// Layouts: one large avatar; two medium avatars side by side; or one large
/// avatar above two medium ones. Returns an empty string when there are no
/// contributors.
pub fn contributor_grid(repo: &RepoRef, top: &[Contributor], total: usize) -> String {
    let rows = match top {
        [] => return String::new(),
        [only] => vec![row(&[cell(&avatar(only, AvatarSize::Large), None)])],
        [first, second] => vec![row(&[
            cell(&avatar(first, AvatarSize::Medium), None),
            cell(&avatar(second, AvatarSize::Medium), None),
        ])],
        [first, second, third, ..] => vec![
            row(&[cell(&avatar(first, AvatarSize::Large), Some(2))]),
            row(&[
                cell(&avatar(second, AvatarSize::Medium), None),
                cell(&avatar(third, AvatarSize::Medium), None),
            ]),
        ],
    };

    let total_link = format!(
        r#"<a href="{}/graphs/contributors">Total: {}</a>"#,
        repo_url(repo),
        contributor_total(total)
    );

    format!(
        r#"<table align="center" border="0">{}{}</table>"#,
        rows.concat(),
        row(&[cell(&total_link, Some(2))])
    )
}

/// Display form of a contributor count, capped at `99+`.
pub fn contributor_total(total: usize) -> String {
    if total >= CONTRIBUTOR_CAP {
        "99+".to_string()
    } else {
        total.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor(id: u64) -> Contributor {
        Contributor {
            id,
            login: format!("user{}", id),
            profile_url: format!("https://github.com/user{}", id),
        }
    }

    #[test]
    fn test_star_badge() {
        let repo = RepoRef::new("foo", "bar");
        assert_eq!(
            Badge::GithubStars(&repo).render(),
            "[![GitHub stars](https://img.shields.io/github/stars/foo/bar?style=social&logo=github&logoColor=1F2328&label=)](https://github.com/foo/bar)"
        );
    }

    #[test]
    fn test_issue_and_pr_badges() {
        let repo = RepoRef::new("foo", "bar");
        assert_eq!(
            Badge::GithubIssues(&repo).render(),
            "[![GitHub issues](https://img.shields.io/github/issues/foo/bar?label=)](https://github.com/foo/bar/issues)"
        );
        assert_eq!(
            Badge::GithubPullRequests(&repo).render(),
            "[![GitHub pull requests](https://img.shields.io/github/issues-pr/foo/bar?label=)](https://github.com/foo/bar/pulls)"
        );
    }

    #[test]
    fn test_pub_badges() {
        let url = "https://pub.dev/packages/http";
        assert_eq!(
            Badge::PubLikes {
                package_url: url,
                name: "http"
            }
            .render(),
            "[![Pub likes](https://img.shields.io/pub/likes/http?style=social&logo=flutter&logoColor=168AFD&label=)](https://pub.dev/packages/http)"
        );

        let points = Badge::PubPoints {
            package_url: url,
            name: "http",
        }
        .render();
        assert!(points.starts_with("[![Pub points](https://img.shields.io/pub/points/http?style=flat&label=&logo=data:image/svg+xml;base64,"));
        assert!(points.ends_with("](https://pub.dev/packages/http/score)"));

        let downloads = Badge::PubDownloads {
            package_url: url,
            count: "1.23k",
        }
        .render();
        assert!(downloads.contains("https://img.shields.io/badge/1.23k%2Fmonth-4AC51C?style=flat&logo="));
        assert!(downloads.ends_with("](https://pub.dev/packages/http)"));
    }

    #[test]
    fn test_grid_empty() {
        assert_eq!(contributor_grid(&RepoRef::new("a", "b"), &[], 0), "");
    }

    #[test]
    fn test_grid_single() {
        let grid = contributor_grid(&RepoRef::new("a", "b"), &[contributor(7)], 1);
        assert_eq!(
            grid,
            concat!(
                r#"<table align="center" border="0">"#,
                r#"<tr align="center"><td><a href="https://github.com/user7"><img width="36px" src="https://avatars.githubusercontent.com/u/7?v=4" /></a></td></tr>"#,
                r#"<tr align="center"><td colspan="2"><a href="https://github.com/a/b/graphs/contributors">Total: 1</a></td></tr>"#,
                "</table>"
            )
        );
    }

    #[test]
    fn test_grid_two_side_by_side() {
        let grid = contributor_grid(
            &RepoRef::new("a", "b"),
            &[contributor(1), contributor(2)],
            2,
        );
        assert_eq!(grid.matches(r#"width="30px""#).count(), 2);
        assert_eq!(grid.matches(r#"width="36px""#).count(), 0);
        assert_eq!(grid.matches("<tr").count(), 2);
    }

    #[test]
    fn test_grid_three_rows() {
        let grid = contributor_grid(
            &RepoRef::new("a", "b"),
            &[contributor(1), contributor(2), contributor(3)],
            250,
        );
        assert_eq!(grid.matches(r#"width="36px""#).count(), 1);
        assert_eq!(grid.matches(r#"width="30px""#).count(), 2);
        assert_eq!(grid.matches("<tr").count(), 3);
        assert!(grid.contains("Total: 99+"));
    }

    #[test]
    fn test_contributor_total_cap() {
        assert_eq!(contributor_total(99), "99");
        assert_eq!(contributor_total(100), "99+");
        assert_eq!(contributor_total(0), "0");
    }
}
