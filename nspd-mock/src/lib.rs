//! nspd-mock
//!
//! Deterministic stand-ins for the NSPD registry: [`MockConnector`] answers from
//! static fixture documents, [`DynamicMockConnector`] defers to a test-side
//! controller.
use std::time::Duration;

use async_trait::async_trait;
use nspd_core::{FetchError, RawDocument, RegistryConnector};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};
pub use fixtures::documents::{
    EMPTY_FLAT, FLAT_VERIFIED, NESTED_DECLARED, PREVIOUSLY_POSTED, REJECTED,
};

/// Identifier that makes [`MockConnector`] fail with a transport error.
pub const FAIL: &str = "FAIL";
/// Identifier that makes [`MockConnector`] stall for [`MockConnector::STALL`].
pub const TIMEOUT: &str = "TIMEOUT";
/// Identifier that makes [`MockConnector`] answer with HTTP 500.
pub const STATUS500: &str = "STATUS500";

/// Mock connector for CI-safe runs. Provides deterministic documents from static fixtures.
///
/// Unknown identifiers yield an empty nested `data.features` document.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// How long the `TIMEOUT` identifier stalls before answering.
    pub const STALL: Duration = Duration::from_millis(200);

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(cadastral_number: &str) -> Result<(), FetchError> {
        match cadastral_number {
            FAIL => Err(FetchError::transport("forced failure: nspd-mock")),
            STATUS500 => Err(FetchError::status(500)),
            TIMEOUT => {
                // Short enough not to slow tests; a gateway timeout below STALL will trip.
                tokio::time::sleep(Self::STALL).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl RegistryConnector for MockConnector {
    fn name(&self) -> &'static str {
        "nspd-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch(&self, cadastral_number: &str) -> Result<RawDocument, FetchError> {
        Self::maybe_fail_or_timeout(cadastral_number).await?;
        Ok(RawDocument::new(fixtures::documents::by_cadastral_number(
            cadastral_number,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sentinels_map_to_fetch_errors() {
        let m = MockConnector::new();
        assert!(matches!(
            m.fetch(FAIL).await,
            Err(FetchError::Transport(_))
        ));
        assert_eq!(m.fetch(STATUS500).await.unwrap_err(), FetchError::status(500));
    }

    #[tokio::test]
    async fn unknown_numbers_get_an_empty_nested_document() {
        let doc = MockConnector::new().fetch("12:34:5678901:2").await.unwrap();
        assert_eq!(doc.as_value()["data"]["features"], serde_json::json!([]));
    }
}
