use serde_json::Value;

/// Where (if anywhere) a document keeps its features list.
///
/// Resolution order is fixed and exhaustive: an `error` payload wins, then a
/// top-level `features` key, then `data.features`. A document matching none of
/// these is `Bare`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocumentShape<'a> {
    /// Object carrying a top-level `error` key; the upstream refused the query.
    Rejected(&'a Value),
    /// `{"features": ...}`. The value is used even when it is not a list.
    Flat(&'a Value),
    /// `{"data": {"features": ...}}`.
    Nested(&'a Value),
    /// No features key at either level, or not an object at all.
    Bare,
}

impl<'a> DocumentShape<'a> {
    /// Classify `doc`.
    #[must_use]
    pub fn resolve(doc: &'a Value) -> Self {
        let Some(obj) = doc.as_object() else {
            return Self::Bare;
        };
        if let Some(err) = obj.get("error") {
            return Self::Rejected(err);
        }
        if let Some(features) = obj.get("features") {
            return Self::Flat(features);
        }
        match obj
            .get("data")
            .and_then(Value::as_object)
            .and_then(|data| data.get("features"))
        {
            Some(features) => Self::Nested(features),
            None => Self::Bare,
        }
    }

    /// The features list, when the shape has one and it is a JSON array.
    #[must_use]
    pub fn features(&self) -> Option<&'a [Value]> {
        match self {
            Self::Flat(v) | Self::Nested(v) => v.as_array().map(Vec::as_slice),
            Self::Rejected(_) | Self::Bare => None,
        }
    }

    /// First feature of a non-empty list. Later entries are never consulted.
    #[must_use]
    pub fn first_feature(&self) -> Option<&'a Value> {
        self.features().and_then(<[Value]>::first)
    }

    /// Short label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rejected(_) => "rejected",
            Self::Flat(_) => "flat",
            Self::Nested(_) => "nested",
            Self::Bare => "bare",
        }
    }
}
