use async_trait::async_trait;

use crate::document::RawDocument;
use crate::{ConnectorKey, FetchError};

/// Contract for anything that can look up a cadastral number in the registry.
///
/// Implementations issue exactly one upstream request per call and report
/// every failure as a [`FetchError`]; they must not panic on bad input or
/// unexpected upstream behavior. Interpretation of the returned document is
/// left to [`crate::normalize`].
#[async_trait]
pub trait RegistryConnector: Send + Sync {
    /// A stable identifier used in logs (e.g., "nspd-client", "nspd-mock").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch the raw search document for `cadastral_number`.
    ///
    /// The identifier is opaque: it is forwarded as-is, without validation.
    async fn fetch(&self, cadastral_number: &str) -> Result<RawDocument, FetchError>;
}
