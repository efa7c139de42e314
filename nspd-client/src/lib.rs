//! nspd-client
//!
//! Public connector that implements `RegistryConnector` against the NSPD
//! geoportal search endpoint (`/api/geoportal/v2/search/geoportal`).
#![warn(missing_docs)]

/// Builder for [`NspdConnector`].
pub mod builder;

use std::time::Duration;

use async_trait::async_trait;
use nspd_core::{ConnectorKey, FetchError, NspdError, RawDocument, RegistryConnector};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, REFERER, USER_AGENT};
use url::Url;

pub use builder::NspdConnectorBuilder;

/// Path of the geoportal search endpoint, appended to the base URL.
pub const SEARCH_PATH: &str = "/api/geoportal/v2/search/geoportal";

/// Thematic search id selecting the cadastral object search.
pub const THEMATIC_SEARCH_ID: &str = "1";

// The geoportal only answers requests that look like they come from its own web UI.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const ACCEPT_JSON: &str = "application/json, text/plain, */*";
const PORTAL_REFERER: &str = "https://nspd.gov.ru/";
const X_REQUESTED_WITH: &str = "X-Requested-With";
const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Public connector type. Production users construct it with
/// `NspdConnector::builder().build()` or `NspdConnector::new_default()`.
///
/// The inner `reqwest::Client` is built once and reused, so clones of a
/// connector share one connection pool.
#[derive(Debug, Clone)]
pub struct NspdConnector {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl NspdConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("nspd-client");

    /// Build a connector for the public registry with default settings.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, NspdError> {
        Self::builder().build()
    }

    /// Start building a connector.
    #[must_use]
    pub fn builder() -> NspdConnectorBuilder {
        NspdConnectorBuilder::new()
    }

    pub(crate) const fn from_parts(http: reqwest::Client, endpoint: Url, timeout: Duration) -> Self {
        Self {
            http,
            endpoint,
            timeout,
        }
    }

    /// Full search endpoint this connector targets, without query parameters.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_reqwest_err(&self, e: &reqwest::Error) -> FetchError {
        if e.is_timeout() {
            return FetchError::timeout(self.timeout);
        }
        // reqwest's own message is generic; the interesting part (DNS, refused, TLS) sits in the source chain.
        let mut msg = e.to_string();
        let mut source = std::error::Error::source(e);
        while let Some(inner) = source {
            msg.push_str(": ");
            msg.push_str(&inner.to_string());
            source = inner.source();
        }
        FetchError::transport(msg)
    }
}

#[async_trait]
impl RegistryConnector for NspdConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "NSPD"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "nspd_client::fetch",
            skip(self),
            fields(endpoint = %self.endpoint),
        )
    )]
    async fn fetch(&self, cadastral_number: &str) -> Result<RawDocument, FetchError> {
        let resp = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("thematicSearchId", THEMATIC_SEARCH_ID),
                ("query", cadastral_number),
            ])
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, ACCEPT_JSON)
            .header(REFERER, PORTAL_REFERER)
            .header(X_REQUESTED_WITH, XML_HTTP_REQUEST)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_reqwest_err(&e))?;

        let status = resp.status();
        #[cfg(feature = "tracing")]
        tracing::debug!(status = status.as_u16(), "registry responded");
        if status != StatusCode::OK {
            return Err(FetchError::status(status.as_u16()));
        }

        let body = resp.bytes().await.map_err(|e| self.map_reqwest_err(&e))?;
        RawDocument::from_slice(&body)
    }
}
