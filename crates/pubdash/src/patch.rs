//! In-place replacement of marker-delimited regions in a text document.

use chrono::{DateTime, SecondsFormat, Utc};
use pubdash_core::{DashError, PatchAction, Result};
use std::fs;
use std::path::Path;

/// A patchable region, delimited by two literal sentinel markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub begin: &'static str,
    pub end: &'static str,
}

/// Region holding the rendered dashboard table.
pub const TABLE_REGION: Region = Region {
    begin: "<!-- md:PubDashboard begin -->",
    end: "<!-- md:PubDashboard end -->",
};

/// Region holding the bare package count.
pub const TOTAL_REGION: Region = Region {
    begin: "<!-- md:PubDashboard-total begin -->",
    end: "<!-- md:PubDashboard-total end -->",
};

/// Result of a successful patch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Replaced,
    /// The marker pair is absent; the file was left untouched.
    MarkersNotFound,
}

/// Replaces the first `begin`..`end` span of `content`, markers included,
/// with `begin + replacement + end`.
///
/// Returns `None` when `begin` is missing or no `end` follows it.
///
/// # Examples
///
/// ```
/// use pubdash::patch::{splice, TOTAL_REGION};
///
/// let doc = "Total: <!-- md:PubDashboard-total begin -->3<!-- md:PubDashboard-total end -->";
/// let patched = splice(doc, TOTAL_REGION, "42").unwrap();
/// assert_eq!(
///     patched,
///     "Total: <!-- md:PubDashboard-total begin -->42<!-- md:PubDashboard-total end -->"
/// );
/// ```
pub fn splice(content: &str, region: Region, replacement: &str) -> Option<String> {
    let start = content.find(region.begin)?;
    let body_start = start + region.begin.len();
    let end = body_start + content[body_start..].find(region.end)?;
    let tail = end + region.end.len();

    let mut patched = String::with_capacity(
        content.len() - (tail - start) + region.begin.len() + replacement.len() + region.end.len(),
    );
    patched.push_str(&content[..start]);
    patched.push_str(region.begin);
    patched.push_str(replacement);
    patched.push_str(region.end);
    patched.push_str(&content[tail..]);
    Some(patched)
}

/// Patches `region` of the file at `path` with `replacement`.
///
/// Read and write failures are returned as [`DashError::Patch`]. A file
/// without the marker pair is not rewritten.
pub fn patch_file(path: &Path, region: Region, replacement: &str) -> Result<PatchOutcome> {
    let content = fs::read_to_string(path).map_err(|source| DashError::Patch {
        action: PatchAction::Read,
        path: path.display().to_string(),
        source,
    })?;

    let Some(patched) = splice(&content, region, replacement) else {
        return Ok(PatchOutcome::MarkersNotFound);
    };

    fs::write(path, patched).map_err(|source| DashError::Patch {
        action: PatchAction::Write,
        path: path.display().to_string(),
        source,
    })?;

    Ok(PatchOutcome::Replaced)
}

/// Body written into the table region: the table followed by an update line.
pub fn table_replacement(table: &str, updated_at: DateTime<Utc>) -> String {
    format!(
        " \n{} \nUpdated on {} by [Action]({}). \n",
        table,
        updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        env!("CARGO_PKG_REPOSITORY")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_doc(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_splice_keeps_surroundings() {
        let doc = "A<!-- md:PubDashboard begin -->OLD<!-- md:PubDashboard end -->Z";
        let patched = splice(doc, TABLE_REGION, "NEW").unwrap();
        assert_eq!(
            patched,
            "A<!-- md:PubDashboard begin -->NEW<!-- md:PubDashboard end -->Z"
        );
    }

    #[test]
    fn test_splice_missing_markers() {
        assert!(splice("no markers here", TABLE_REGION, "NEW").is_none());
        assert!(splice("<!-- md:PubDashboard begin --> only", TABLE_REGION, "NEW").is_none());
        assert!(splice("<!-- md:PubDashboard end --><!-- md:PubDashboard begin -->", TABLE_REGION, "x").is_none());
    }

    #[test]
    fn test_splice_first_pair_only() {
        let doc = "<!-- md:PubDashboard begin -->1<!-- md:PubDashboard end -->\n\
                   <!-- md:PubDashboard begin -->2<!-- md:PubDashboard end -->";
        let patched = splice(doc, TABLE_REGION, "X").unwrap();
        assert!(patched.starts_with("<!-- md:PubDashboard begin -->X<!-- md:PubDashboard end -->\n"));
        assert!(patched.ends_with("<!-- md:PubDashboard begin -->2<!-- md:PubDashboard end -->"));
    }

    #[test]
    fn test_regions_do_not_overlap() {
        let doc = "<!-- md:PubDashboard begin -->t<!-- md:PubDashboard end -->\
                   <!-- md:PubDashboard-total begin -->1<!-- md:PubDashboard-total end -->";
        let patched = splice(doc, TOTAL_REGION, "9").unwrap();
        assert!(patched.contains("<!-- md:PubDashboard begin -->t<!-- md:PubDashboard end -->"));
        assert!(patched.contains("<!-- md:PubDashboard-total begin -->9<!-- md:PubDashboard-total end -->"));
    }

    #[test]
    fn test_patch_file_replaces_region() {
        let file = temp_doc("A<!-- md:PubDashboard begin -->OLD<!-- md:PubDashboard end -->Z");

        let outcome = patch_file(file.path(), TABLE_REGION, "NEW").unwrap();

        assert_eq!(outcome, PatchOutcome::Replaced);
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "A<!-- md:PubDashboard begin -->NEW<!-- md:PubDashboard end -->Z"
        );
    }

    #[test]
    fn test_patch_file_without_markers_is_unchanged() {
        let file = temp_doc("# Title\n\nNothing to see.\n");

        let outcome = patch_file(file.path(), TABLE_REGION, "NEW").unwrap();

        assert_eq!(outcome, PatchOutcome::MarkersNotFound);
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "# Title\n\nNothing to see.\n"
        );
    }

    #[test]
    fn test_patch_file_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.md");

        let err = patch_file(&path, TOTAL_REGION, "1").unwrap_err();

        assert!(matches!(
            err,
            DashError::Patch {
                action: PatchAction::Read,
                ..
            }
        ));
        assert!(err.to_string().starts_with("failed to read "));
    }

    #[test]
    fn test_table_replacement_layout() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let body = table_replacement("TABLE", at);

        assert!(body.starts_with(" \nTABLE \nUpdated on 2024-05-01T12:30:00Z by [Action]("));
        assert!(body.ends_with("). \n"));
    }
}
