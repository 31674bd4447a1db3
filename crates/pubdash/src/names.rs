//! Input name list handling.

use std::collections::HashSet;

/// Splits a comma-separated list, trimming entries and dropping empty and
/// duplicate ones. First appearance wins.
///
/// # Examples
///
/// ```
/// use pubdash::names::split_list;
///
/// assert_eq!(split_list(" http, dio,,http "), vec!["http", "dio"]);
/// assert!(split_list("").is_empty());
/// ```
pub fn split_list(list: &str) -> Vec<String> {
    dedup(list.split(','))
}

/// Merges publisher-discovered names with explicitly configured ones.
///
/// The result holds each distinct trimmed, non-empty name exactly once.
/// Matching is exact and case-sensitive. Order carries no meaning for the
/// final document, which the sorter orders.
pub fn merge_names<I, J, S, T>(discovered: I, configured: J) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    J: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let discovered: Vec<S> = discovered.into_iter().collect();
    let configured: Vec<T> = configured.into_iter().collect();

    dedup(
        discovered
            .iter()
            .map(|name| name.as_ref())
            .chain(configured.iter().map(|name| name.as_ref())),
    )
}

fn dedup<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(*name))
        .map(String::from)
        .collect()
}
