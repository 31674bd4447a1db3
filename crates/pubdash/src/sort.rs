use crate::config::{SortField, SortMode};
use pubdash_core::PackageRecord;
use std::cmp::Ordering;

/// Orders records in place by `field` and `mode`.
///
/// The sort is stable. Descending order reverses the comparison result, so
/// records with equal keys keep their input order in both directions.
///
/// For [`SortField::Published`] the ascending direction puts the most
/// recently published package first.
///
/// # Examples
///
/// ```
/// use pubdash::config::{SortField, SortMode};
/// use pubdash::sort::sort_records;
/// use pubdash_core::PackageRecord;
///
/// let mut records = vec![PackageRecord::unresolved("b"), PackageRecord::unresolved("a")];
/// sort_records(&mut records, SortField::Name, SortMode::Asc);
/// assert_eq!(records[0].name, "a");
/// ```
pub fn sort_records(records: &mut [PackageRecord], field: SortField, mode: SortMode) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match mode {
            SortMode::Asc => ordering,
            SortMode::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &PackageRecord, b: &PackageRecord, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        // ISO-8601 strings compare chronologically; newest first.
        SortField::Published => b.published_at.cmp(&a.published_at),
        SortField::PubLikes => a.score.like_count.cmp(&b.score.like_count),
        SortField::PubDownloads => a
            .score
            .download_count_30_days
            .cmp(&b.score.download_count_30_days),
        SortField::GithubStars => a.repo_meta.stars.cmp(&b.repo_meta.stars),
    }
}
