use std::sync::Arc;

use nspd_core::{
    ConnectorKey, FetchError, GatewayConfig, NspdError, RawDocument, RegistryConnector,
    SearchReport, normalize,
};

/// Cadastral lookup gateway: one connector call, bounded by a deadline, then
/// normalization into a [`SearchReport`].
///
/// Holds no mutable state; share it behind an `Arc` across concurrent
/// requests.
pub struct Gateway {
    pub(crate) connector: Arc<dyn RegistryConnector>,
    pub(crate) cfg: GatewayConfig,
}

/// Builder for constructing a [`Gateway`].
pub struct GatewayBuilder {
    connector: Option<Arc<dyn RegistryConnector>>,
    cfg: GatewayConfig,
}

impl Default for GatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayBuilder {
    /// Create a new builder with default settings.
    ///
    /// Starts with no connector; register one via [`Self::with_connector`].
    /// The request timeout defaults to 30 seconds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: GatewayConfig::default(),
        }
    }

    /// Register the registry connector. A later call replaces an earlier one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn RegistryConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Replace the whole gateway configuration.
    #[must_use]
    pub const fn config(mut self, cfg: GatewayConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Deadline for one connector call.
    ///
    /// Expiry is treated like any other fetch failure: the caller sees
    /// `"Object not found"` and the report carries a `Timeout` warning.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.request_timeout = timeout;
        self
    }

    /// Build the gateway.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was registered or the timeout is zero.
    pub fn build(self) -> Result<Gateway, NspdError> {
        let connector = self
            .connector
            .ok_or_else(|| NspdError::invalid_arg("a registry connector is required"))?;
        if self.cfg.request_timeout.is_zero() {
            return Err(NspdError::invalid_arg("request_timeout must be non-zero"));
        }
        Ok(Gateway {
            connector,
            cfg: self.cfg,
        })
    }
}

impl Gateway {
    /// Start building a new `Gateway`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use nspd::Gateway;
    /// use nspd_client::NspdConnector;
    ///
    /// let gateway = Gateway::builder()
    ///     .with_connector(Arc::new(NspdConnector::new_default()?))
    ///     .request_timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// let report = gateway.search("50:27:0030526:16").await;
    /// ```
    #[must_use]
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    /// Key of the registered connector.
    #[must_use]
    pub fn connector_key(&self) -> ConnectorKey {
        self.connector.key()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.cfg
    }

    /// Look up one cadastral number.
    ///
    /// Never fails: upstream problems become an error outcome and the cause is
    /// kept in `SearchReport::warnings`. The identifier is echoed unchanged.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "nspd::search",
            skip(self),
            fields(connector = self.connector.name()),
        )
    )]
    pub async fn search(&self, cadastral_number: &str) -> SearchReport {
        let result = Self::connector_call_with_timeout(
            self.connector.name(),
            self.cfg.request_timeout,
            self.connector.fetch(cadastral_number),
        )
        .await;
        let report = normalize(cadastral_number, result);

        #[cfg(feature = "tracing")]
        {
            for cause in &report.warnings {
                tracing::warn!(error = %cause, "registry lookup degraded to error outcome");
            }
            if report.is_success() {
                tracing::info!("parcel found");
            }
        }
        report
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "nspd::core::connector_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn connector_call_with_timeout<Fut>(
        connector_name: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<RawDocument, FetchError>
    where
        Fut: std::future::Future<Output = Result<RawDocument, FetchError>>,
    {
        #[cfg(not(feature = "tracing"))]
        let _ = connector_name;
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(FetchError::timeout(timeout)))
    }
}
