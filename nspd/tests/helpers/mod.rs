#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use nspd::{FetchError, Gateway, RawDocument, RegistryConnector};
use serde_json::{Value, json};

/// In-memory connector used by integration tests: answers every number with
/// the same result after an optional delay, and counts calls.
pub struct ScriptedConnector {
    pub name: &'static str,
    pub delay: Duration,
    pub result: Result<Value, FetchError>,
    pub calls: AtomicUsize,
}

impl ScriptedConnector {
    pub fn ok(doc: Value) -> Arc<Self> {
        Arc::new(Self {
            name: "scripted",
            delay: Duration::ZERO,
            result: Ok(doc),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn err(e: FetchError) -> Arc<Self> {
        Arc::new(Self {
            name: "scripted",
            delay: Duration::ZERO,
            result: Err(e),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn slow(doc: Value, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            name: "scripted",
            delay,
            result: Ok(doc),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistryConnector for ScriptedConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, _cadastral_number: &str) -> Result<RawDocument, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.clone().map(RawDocument::new)
    }
}

pub fn gateway(c: Arc<dyn RegistryConnector>) -> Gateway {
    Gateway::builder()
        .with_connector(c)
        .build()
        .expect("gateway builds")
}

pub fn one_feature(options: Value) -> Value {
    json!({"features": [{"geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                         "properties": {"options": options}}]})
}
