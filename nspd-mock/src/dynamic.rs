use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use nspd_core::{FetchError, RawDocument, RegistryConnector};

/// Instruction for how `fetch` should behave for a given cadastral number.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided document immediately.
    Return(RawDocument),
    /// Fail immediately with the provided error.
    Fail(FetchError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<String, MockBehavior>,
    fallback: Option<MockBehavior>,
    requests: Vec<String>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for a specific cadastral number.
    pub async fn set_behavior(&self, cadastral_number: impl Into<String>, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(cadastral_number.into(), behavior);
    }

    /// Behavior for numbers without a specific rule.
    pub async fn set_fallback(&self, behavior: MockBehavior) {
        self.state.lock().await.fallback = Some(behavior);
    }

    /// Every cadastral number `fetch` was called with, in call order.
    pub async fn requests(&self) -> Vec<String> {
        self.state.lock().await.requests.clone()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.fallback = None;
        guard.requests.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Numbers with no rule and no fallback fail with `FetchError::Status { status: 404 }`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn RegistryConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn RegistryConnector>, controller)
    }
}

#[async_trait]
impl RegistryConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn fetch(&self, cadastral_number: &str) -> Result<RawDocument, FetchError> {
        // Snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(cadastral_number.to_string());
            guard
                .rules
                .get(cadastral_number)
                .or(guard.fallback.as_ref())
                .cloned()
        };

        match behavior {
            Some(MockBehavior::Return(doc)) => Ok(doc),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(FetchError::status(404)),
        }
    }
}
