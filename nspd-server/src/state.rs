use std::sync::Arc;

use nspd::Gateway;

/// Shared handler state. Cloned per request; the gateway itself is shared.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<Gateway>,
}

impl AppState {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}
