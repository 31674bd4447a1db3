use crate::error::{DashError, Result};
use reqwest::{Client, RequestBuilder, header};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("pubdash/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport settings shared by every upstream client.
///
/// # Examples
///
/// ```
/// use pubdash_core::http::HttpConfig;
///
/// let config = HttpConfig::default();
/// assert!(config.require_https);
/// assert_eq!(config.timeout_secs, 30);
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    /// Rejects plain `http://` URLs. Disabled only when talking to local mock servers.
    pub require_https: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            require_https: true,
        }
    }
}

/// Thin JSON-over-HTTP client.
///
/// Every call is a single GET with no retries. Non-success statuses are
/// reported as [`DashError::Status`] so callers can tell a missing resource
/// apart from a transport failure.
///
/// # Examples
///
/// ```no_run
/// use pubdash_core::http::{HttpClient, HttpConfig};
///
/// # async fn example() -> pubdash_core::error::Result<()> {
/// let client = HttpClient::new(&HttpConfig::default())?;
/// let body: serde_json::Value = client.get_json("https://pub.dev/api/packages/http", None).await?;
/// println!("{}", body["name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    require_https: bool,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DashError::Http {
                url: String::new(),
                source: e,
            })?;

        Ok(Self {
            client,
            require_https: config.require_https,
        })
    }

    /// Fetches `url` and decodes the body as `T`.
    ///
    /// A non-empty `bearer` token is attached as `Authorization: Bearer <token>`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, bearer: Option<&str>) -> Result<T> {
        self.get_json_with(url, bearer, |request| request).await
    }

    /// Same as [`get_json`](Self::get_json) but lets the caller add headers.
    pub async fn get_json_with<T, F>(&self, url: &str, bearer: Option<&str>, decorate: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        self.ensure_https(url)?;
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(token) = bearer.filter(|t| !t.is_empty()) {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        request = decorate(request);

        let response = request.send().await.map_err(|e| DashError::Http {
            url: url.to_string(),
            source: e,
        })?;

        if !response.status().is_success() {
            return Err(DashError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| DashError::Http {
            url: url.to_string(),
            source: e,
        })?;

        Ok(serde_json::from_slice(&body)?)
    }

    fn ensure_https(&self, url: &str) -> Result<()> {
        if self.require_https && !url.starts_with("https://") {
            return Err(DashError::InvalidUrl(url.to_string()));
        }
        Ok(())
    }
}
