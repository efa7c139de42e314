use serde_json::{Map, Value};

/// Read-only view over a JSON object with lenient, typed getters.
///
/// Missing keys and values of the wrong kind never fail; they fall back to
/// the empty marker of the requested type.
#[derive(Debug, Clone, Copy)]
pub struct PropertyBag<'a>(Option<&'a Map<String, Value>>);

impl<'a> PropertyBag<'a> {
    /// View `value` as a bag. Anything but an object yields an empty bag.
    #[must_use]
    pub fn of(value: Option<&'a Value>) -> Self {
        Self(value.and_then(Value::as_object))
    }

    /// Nested bag stored under `key`.
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        Self::of(self.get(key))
    }

    /// Raw value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|m| m.get(key))
    }

    /// Text under `key`: strings verbatim, numbers and booleans as their JSON
    /// text, everything else as `""`.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Null | Value::Array(_) | Value::Object(_)) | None => String::new(),
        }
    }

    /// Number under `key`. Numeric strings are accepted; anything else is
    /// treated as absent.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }
}
