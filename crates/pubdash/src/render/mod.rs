//! Markdown table rendering.
//!
//! [`render_table`] is a pure function of the ordered records and the sort
//! field. Per-badge markup lives in [`template`]; free-text and number
//! formatting in [`format`].

pub mod format;
pub mod template;

use crate::config::SortField;
use format::{format_download_count, sanitize_cell};
use pubdash_core::PackageRecord;
use template::{Badge, PLACEHOLDER, UNRESOLVED_MARKER, contributor_grid};

const TABLE_HEADER: &str = "| <sub>Package</sub> | <sub>Stars/Likes</sub> | <sub>Downloads/Points</sub> | <sub>Issues / Pull_requests</sub> | <sub>Contributors</sub> | \n\
|--------------------|------------------------|------------------------------|-----------------------------------|:-----------------------:| \n";

/// Rendered cells of one table row.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Row {
    name: String,
    version: String,
    description: String,
    license: String,
    platform: String,
    published: String,
    stars: String,
    likes: String,
    downloads: String,
    points: String,
    issues: String,
    pull_requests: String,
    contributors: String,
}

impl Row {
    fn unresolved(record: &PackageRecord) -> Self {
        Self {
            name: format!("{} {}", record.name, UNRESOLVED_MARKER),
            ..Self::default()
        }
    }

    fn resolved(record: &PackageRecord) -> Self {
        let package_url = pubdash_pub::package_url(&record.name);
        let name = record.name.as_str();

        let platform = if record.score.platforms.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            record.score.platforms.join(", ")
        };

        let downloads = format_download_count(record.score.download_count_30_days);

        let mut row = Self {
            name: format!("[{}]({})", name, package_url),
            version: format!("v{}", record.version),
            description: sanitize_cell(&record.description),
            platform: format!("<strong>Platform:</strong> {}", platform),
            published: format!("<strong>Published:</strong> {}", record.published_at),
            likes: Badge::PubLikes {
                package_url: &package_url,
                name,
            }
            .render(),
            points: Badge::PubPoints {
                package_url: &package_url,
                name,
            }
            .render(),
            downloads: Badge::PubDownloads {
                package_url: &package_url,
                count: &downloads,
            }
            .render(),
            issues: PLACEHOLDER.to_string(),
            pull_requests: PLACEHOLDER.to_string(),
            ..Self::default()
        };

        if let Some(repo) = &record.repo {
            let license = record.repo_meta.license.as_deref().unwrap_or(PLACEHOLDER);
            row.license = format!("<strong>License:</strong> {}", sanitize_cell(license));
            row.stars = Badge::GithubStars(repo).render();
            row.issues = Badge::GithubIssues(repo).render();
            row.pull_requests = Badge::GithubPullRequests(repo).render();
            row.contributors = contributor_grid(
                repo,
                &record.top_contributors,
                record.repo_meta.contributor_count,
            );
        }

        row
    }

    fn to_markdown(&self) -> String {
        format!(
            "| {} <sup><strong>{}</strong></sup> <br/> <sub>{}</sub> <br/> <sub>{}</sub> <br/> <sub>{}</sub> <br/> <sub>{}</sub> | {} <br/> {} | {} <br/> {} | {} <br/> {} | {} | \n",
            self.name,
            self.version,
            self.description,
            self.license,
            self.platform,
            self.published,
            self.stars,
            self.likes,
            self.downloads,
            self.points,
            self.issues,
            self.pull_requests,
            self.contributors,
        )
    }
}

/// Renders the dashboard table for already-sorted records.
///
/// Output is a caption line naming the sort field and record count, a
/// header row, and exactly one line per record.
pub fn render_table(records: &[PackageRecord], sort_field: SortField) -> String {
    let mut markdown = format!(
        "<sub>Sort by {} | Total {}</sub> \n\n",
        sort_field,
        records.len()
    );
    markdown.push_str(TABLE_HEADER);

    for record in records {
        let row = if record.is_resolved() {
            Row::resolved(record)
        } else {
            Row::unresolved(record)
        };
        markdown.push_str(&row.to_markdown());
    }

    markdown
}

/// Renders the bare record count.
pub fn render_total(records: &[PackageRecord]) -> String {
    records.len().to_string()
}
