use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::FetchError;

/// Decoded upstream search payload.
///
/// The shape is untrusted: it may or may not carry a `features` list, and the
/// list may sit at the top level or one level down under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDocument(Value);

impl RawDocument {
    /// Wrap an already decoded JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Decode a response body.
    ///
    /// # Errors
    /// Returns `FetchError::Decode` if `body` is not valid JSON.
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        serde_json::from_slice(body)
            .map(Self)
            .map_err(|e| FetchError::decode(e.to_string()))
    }

    /// Borrow the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the wrapper and return the JSON value.
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for RawDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
