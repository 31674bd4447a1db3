use thiserror::Error;

/// Core error types for pubdash.
///
/// Network and decoding failures are recovered by the aggregation pipeline
/// (logged, then replaced by zero values). Only document patching surfaces
/// errors to the caller.
///
/// # Examples
///
/// ```
/// use pubdash_core::error::{DashError, Result};
///
/// fn require_https(url: &str) -> Result<()> {
///     if !url.starts_with("https://") {
///         return Err(DashError::InvalidUrl(url.into()));
///     }
///     Ok(())
/// }
///
/// assert!(require_https("http://pub.dev").is_err());
/// ```
#[derive(Error, Debug)]
pub enum DashError {
    #[error("request failed for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to {action} {path}: {source}")]
    Patch {
        action: PatchAction,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("URL must use HTTPS: {0}")]
    InvalidUrl(String),
}

/// File operation that failed while patching a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchAction {
    Read,
    Write,
}

impl std::fmt::Display for PatchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

impl DashError {
    /// Returns `true` when the upstream answered 404 Not Found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Convenience type alias for `Result<T, DashError>`.
pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let error = DashError::Status {
            status: 404,
            url: "https://pub.dev/api/packages/nope".into(),
        };
        assert_eq!(
            error.to_string(),
            "HTTP 404 for https://pub.dev/api/packages/nope"
        );
        assert!(error.is_not_found());
    }

    #[test]
    fn test_patch_error_display() {
        let error = DashError::Patch {
            action: PatchAction::Read,
            path: "README.md".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "failed to read README.md: missing");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: DashError = io_err.into();
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let error: DashError = json_err.into();
        assert!(error.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_invalid_url() {
        let error = DashError::InvalidUrl("http://example.com".into());
        assert_eq!(error.to_string(), "URL must use HTTPS: http://example.com");
    }
}
