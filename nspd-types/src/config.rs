//! Configuration types shared by connectors and the gateway.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Public NSPD geoportal host.
pub const DEFAULT_BASE_URL: &str = "https://nspd.gov.ru";

/// Deadline applied to one upstream lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// TLS certificate handling for the upstream connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TlsVerification {
    /// Validate the server certificate chain and host name.
    #[default]
    Enabled,
    /// Accept any certificate. Only for deployments where the registry's
    /// chain cannot be validated by the local trust store; man-in-the-middle
    /// attacks go undetected in this mode.
    Disabled,
}

/// Settings for the HTTP connector talking to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Scheme and host of the registry, without a trailing path.
    pub base_url: String,
    /// Per-request timeout covering connect, send and body download.
    pub timeout: Duration,
    /// Certificate validation mode.
    pub tls: TlsVerification,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            tls: TlsVerification::Enabled,
        }
    }
}

/// Settings for the `Gateway` facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Overall deadline for one connector call. Expiry is reported as a
    /// timeout fetch failure.
    pub request_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}
