//! pub.dev registry client.
//!
//! Provides access to pub.dev via:
//! - Package API (<https://pub.dev/api/packages/{package}>) for latest-release metadata
//! - Score API (<https://pub.dev/api/packages/{package}/score>) for points, likes and downloads
//! - Search API (<https://pub.dev/api/search?q=publisher:{name}&page={n}>) for publisher listings
//!
//! Requests are sequential and never retried.

use crate::types::{PackageResponse, PublisherPage, ScoreResponse};
use pubdash_core::{HttpClient, PackageInfo, PackageRegistry, Result, ScoreInfo};
use std::collections::HashSet;

/// Base URL of the pub.dev website and API.
pub const PUB_DEV_URL: &str = "https://pub.dev";

/// Upper bound on publisher search pages walked for one publisher.
const MAX_PUBLISHER_PAGES: u32 = 1000;

/// Returns the URL for a package's page on pub.dev.
///
/// Package names are URL-encoded to prevent path traversal attacks.
pub fn package_url(name: &str) -> String {
    format!("{}/packages/{}", PUB_DEV_URL, urlencoding::encode(name))
}

/// Client for the pub.dev REST API.
///
/// # Examples
///
/// ```no_run
/// use pubdash_core::{HttpClient, HttpConfig, PackageRegistry};
/// use pubdash_pub::PubDevRegistry;
///
/// # #[tokio::main]
/// # async fn main() -> pubdash_core::Result<()> {
/// let http = HttpClient::new(&HttpConfig::default())?;
/// let registry = PubDevRegistry::new(http);
///
/// let info = registry.fetch_package("http").await?;
/// assert!(info.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PubDevRegistry {
    http: HttpClient,
    base_url: String,
}

impl PubDevRegistry {
    /// Creates a client for the public pub.dev instance.
    pub fn new(http: HttpClient) -> Self {
        Self::with_base_url(http, PUB_DEV_URL)
    }

    /// Creates a client for a pub.dev-compatible server at `base_url`.
    pub fn with_base_url(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn package_api_url(&self, name: &str) -> String {
        format!(
            "{}/api/packages/{}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    fn publisher_page_url(&self, publisher: &str, page: u32) -> String {
        format!(
            "{}/api/search?q=publisher:{}&page={}",
            self.base_url,
            urlencoding::encode(publisher),
            page
        )
    }

    async fn fetch_publisher_page(&self, publisher: &str, page: u32) -> Result<PublisherPage> {
        let url = self.publisher_page_url(publisher, page);
        self.http.get_json(&url, None).await
    }
}

#[async_trait::async_trait]
impl PackageRegistry for PubDevRegistry {
    async fn fetch_package(&self, name: &str) -> Result<Option<PackageInfo>> {
        let url = self.package_api_url(name);
        match self.http.get_json::<PackageResponse>(&url, None).await {
            Ok(response) => Ok(response.into_info()),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn fetch_score(&self, name: &str) -> Result<ScoreInfo> {
        let url = format!("{}/score", self.package_api_url(name));
        let response: ScoreResponse = self.http.get_json(&url, None).await?;
        Ok(response.into_score())
    }

    async fn list_publisher_packages(&self, publisher: &str) -> Result<Vec<String>> {
        let publisher = publisher.trim();
        if publisher.is_empty() {
            return Ok(Vec::new());
        }

        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for page_index in 1..=MAX_PUBLISHER_PAGES {
            tracing::info!("publisher {}: page {}", publisher, page_index);

            let page = match self.fetch_publisher_page(publisher, page_index).await {
                Ok(page) => page,
                // Nothing collected yet: the whole lookup failed.
                Err(e) if names.is_empty() => return Err(e),
                Err(e) => {
                    tracing::warn!(
                        "publisher {}: page {} failed, keeping {} packages: {}",
                        publisher,
                        page_index,
                        names.len(),
                        e
                    );
                    break;
                }
            };

            if page.packages.is_empty() {
                break;
            }

            for entry in page.packages {
                if !entry.package.is_empty() && seen.insert(entry.package.clone()) {
                    names.push(entry.package);
                }
            }
        }

        Ok(names)
    }
}
