//! Report envelopes returned by the gateway.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;
use crate::record::ParcelRecord;

/// Coarse, caller-facing reason for a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupFailure {
    /// The upstream could not be reached, failed, or answered with garbage.
    #[serde(rename = "Object not found")]
    ObjectNotFound,
    /// The upstream answered, but with no matching features.
    #[serde(rename = "No features found")]
    NoFeatures,
}

impl LookupFailure {
    /// Message string exposed to callers.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ObjectNotFound => "Object not found",
            Self::NoFeatures => "No features found",
        }
    }
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Tagged result of one lookup. Serialized with a `status` discriminator of
/// `"success"` or `"error"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// A parcel was found and normalized.
    Success {
        /// Normalized parcel attributes.
        data: ParcelRecord,
        /// Upstream geometry, passed through untouched.
        geometry: Value,
    },
    /// No parcel could be produced.
    Error {
        /// Caller-facing reason.
        message: LookupFailure,
    },
}

/// Summary of a cadastral lookup.
///
/// Carries the identifier exactly as the caller supplied it, the tagged
/// [`Outcome`], and any `warnings` collected along the way. Warnings hold the
/// upstream failure cause that the outcome deliberately hides; they are kept
/// for logging and never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Identifier supplied by the caller.
    pub cadastral_number: String,
    /// Success or error payload.
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Non-fatal issues encountered while building the report.
    #[serde(skip)]
    pub warnings: Vec<FetchError>,
}

impl SearchReport {
    /// Build a successful report.
    pub fn success(cadastral_number: impl Into<String>, data: ParcelRecord, geometry: Value) -> Self {
        Self {
            cadastral_number: cadastral_number.into(),
            outcome: Outcome::Success { data, geometry },
            warnings: Vec::new(),
        }
    }

    /// Build a failed report.
    pub fn failure(cadastral_number: impl Into<String>, reason: LookupFailure) -> Self {
        Self {
            cadastral_number: cadastral_number.into(),
            outcome: Outcome::Error { message: reason },
            warnings: Vec::new(),
        }
    }

    /// Attach a warning, returning the updated report.
    #[must_use]
    pub fn with_warning(mut self, warning: FetchError) -> Self {
        self.warnings.push(warning);
        self
    }

    /// True when the outcome is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    /// The normalized record, if any.
    #[must_use]
    pub const fn record(&self) -> Option<&ParcelRecord> {
        match &self.outcome {
            Outcome::Success { data, .. } => Some(data),
            Outcome::Error { .. } => None,
        }
    }

    /// The pass-through geometry, if any.
    #[must_use]
    pub const fn geometry(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Success { geometry, .. } => Some(geometry),
            Outcome::Error { .. } => None,
        }
    }

    /// The failure reason, if any.
    #[must_use]
    pub const fn failure_reason(&self) -> Option<LookupFailure> {
        match &self.outcome {
            Outcome::Success { .. } => None,
            Outcome::Error { message } => Some(*message),
        }
    }
}
