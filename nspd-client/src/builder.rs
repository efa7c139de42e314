use std::time::Duration;

use nspd_core::{NspdError, TlsVerification, UpstreamConfig};
use url::Url;

use crate::{NspdConnector, SEARCH_PATH};

/// Builder for [`NspdConnector`].
///
/// Defaults: public registry host, 30 second timeout, TLS verification on.
#[derive(Debug, Clone, Default)]
pub struct NspdConnectorBuilder {
    cfg: UpstreamConfig,
    http: Option<reqwest::Client>,
}

impl NspdConnectorBuilder {
    /// Builder with [`UpstreamConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole upstream configuration.
    #[must_use]
    pub fn config(mut self, cfg: UpstreamConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Scheme and host of the registry (e.g. a local mock server).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.cfg.base_url = base_url.into();
        self
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    /// Certificate validation mode.
    ///
    /// `TlsVerification::Disabled` accepts any certificate. Use it only when the
    /// deployment cannot validate the registry's chain; it is logged as a
    /// warning at build time.
    #[must_use]
    pub const fn tls(mut self, tls: TlsVerification) -> Self {
        self.cfg.tls = tls;
        self
    }

    /// Use a caller-provided `reqwest::Client`.
    ///
    /// The TLS mode is not applied to an injected client; configure it on the
    /// client itself. The client must also be built with
    /// `redirect(reqwest::redirect::Policy::none())`, otherwise a 3xx answer is
    /// followed instead of being reported as `FetchError::Status`. The
    /// per-request timeout and headers still apply.
    #[must_use]
    pub fn with_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL does not parse, uses a scheme
    /// other than http/https, or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<NspdConnector, NspdError> {
        let endpoint = search_endpoint(&self.cfg.base_url)?;

        let http = match self.http {
            Some(http) => http,
            None => {
                // Redirects surface as non-200 statuses instead of being followed.
                let mut builder = reqwest::Client::builder()
                    .timeout(self.cfg.timeout)
                    .redirect(reqwest::redirect::Policy::none());
                if matches!(self.cfg.tls, TlsVerification::Disabled) {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        base_url = %self.cfg.base_url,
                        "TLS certificate verification disabled for registry connector"
                    );
                    builder = builder.danger_accept_invalid_certs(true);
                }
                builder
                    .build()
                    .map_err(|e| NspdError::invalid_arg(format!("http client: {e}")))?
            }
        };

        Ok(NspdConnector::from_parts(http, endpoint, self.cfg.timeout))
    }
}

fn search_endpoint(base_url: &str) -> Result<Url, NspdError> {
    let base = base_url.trim().trim_end_matches('/');
    let url = Url::parse(&format!("{base}{SEARCH_PATH}"))
        .map_err(|e| NspdError::invalid_arg(format!("base url {base_url:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(NspdError::invalid_arg(format!(
            "base url {base_url:?}: unsupported scheme {other}"
        ))),
    }
}
