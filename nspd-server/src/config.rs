//! Command-line and environment settings for the server binary.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use nspd::{Gateway, NspdError, RegistryConnector, TlsVerification, UpstreamConfig};
use nspd_client::NspdConnector;
use nspd_mock::MockConnector;

/// Service title reported at startup.
pub const SERVICE_TITLE: &str = "NSPD API";
/// Service version reported at startup.
pub const SERVICE_VERSION: &str = "4.0.0";

#[derive(Debug, Clone, Parser)]
#[command(name = "nspd-server", version, about = "HTTP gateway to the NSPD cadastral registry")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "NSPD_LISTEN", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// Registry base URL.
    #[arg(long, env = "NSPD_BASE_URL", default_value = nspd::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Upstream deadline in seconds.
    #[arg(long, env = "NSPD_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Skip TLS certificate validation for the registry.
    #[arg(long, env = "NSPD_INSECURE_TLS")]
    pub insecure_tls: bool,

    /// Serve built-in fixture documents instead of calling the registry.
    #[arg(long, env = "NSPD_USE_MOCK")]
    pub use_mock: bool,
}

impl ServerConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout(),
            tls: if self.insecure_tls {
                TlsVerification::Disabled
            } else {
                TlsVerification::Enabled
            },
        }
    }

    /// Connector selected by `use_mock`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the live connector cannot be built from the
    /// upstream settings.
    pub fn connector(&self) -> Result<Arc<dyn RegistryConnector>, NspdError> {
        if self.use_mock {
            return Ok(Arc::new(MockConnector::new()));
        }
        let live = NspdConnector::builder().config(self.upstream()).build()?;
        Ok(Arc::new(live))
    }

    /// Gateway wired to [`Self::connector`].
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unusable base URL or a zero timeout.
    pub fn gateway(&self) -> Result<Gateway, NspdError> {
        Gateway::builder()
            .with_connector(self.connector()?)
            .request_timeout(self.timeout())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_public_service() {
        let cfg = ServerConfig::try_parse_from(["nspd-server"]).unwrap();
        assert_eq!(cfg.listen, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.base_url, "https://nspd.gov.ru");
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
        assert_eq!(cfg.upstream().tls, TlsVerification::Enabled);
        assert!(!cfg.use_mock);
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = ServerConfig::try_parse_from([
            "nspd-server",
            "--listen",
            "127.0.0.1:9000",
            "--timeout-secs",
            "5",
            "--insecure-tls",
            "--use-mock",
        ])
        .unwrap();
        assert_eq!(cfg.listen.port(), 9000);
        assert_eq!(cfg.upstream().tls, TlsVerification::Disabled);
        let gw = cfg.gateway().unwrap();
        assert_eq!(gw.connector_key().as_str(), "nspd-mock");
        assert_eq!(gw.config().request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let cfg =
            ServerConfig::try_parse_from(["nspd-server", "--use-mock", "--timeout-secs", "0"])
                .unwrap();
        assert!(matches!(cfg.gateway(), Err(NspdError::InvalidArg(_))));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let cfg = ServerConfig::try_parse_from(["nspd-server", "--base-url", "nspd.gov.ru"])
            .unwrap();
        assert!(matches!(cfg.connector(), Err(NspdError::InvalidArg(_))));
    }
}
