use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single upstream registry request.
///
/// The human-readable cause is kept for diagnostics only. Callers of the
/// gateway never see it: every variant collapses into the same
/// "Object not found" outcome.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchError {
    /// The request did not complete within the configured deadline.
    #[error("request timed out after {after_ms} ms")]
    Timeout {
        /// Deadline that expired, in milliseconds.
        after_ms: u64,
    },

    /// DNS, connect, TLS or any other transport-level fault.
    #[error("transport error: {0}")]
    Transport(String),

    /// The upstream answered with a status other than 200.
    #[error("Status code: {status}")]
    Status {
        /// HTTP status code returned by the upstream.
        status: u16,
    },

    /// The upstream answered 200 but the body is not valid JSON.
    #[error("invalid JSON body: {0}")]
    Decode(String),

    /// The upstream answered 200 with a payload that reports an error.
    #[error("upstream reported an error: {0}")]
    Upstream(String),
}

impl FetchError {
    /// Helper: build a `Timeout` error from a duration.
    #[must_use]
    pub fn timeout(after: std::time::Duration) -> Self {
        Self::Timeout {
            after_ms: u64::try_from(after.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Helper: build a `Transport` error from any displayable cause.
    pub fn transport(cause: impl Into<String>) -> Self {
        Self::Transport(cause.into())
    }

    /// Helper: build a `Status` error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Helper: build a `Decode` error from any displayable cause.
    pub fn decode(cause: impl Into<String>) -> Self {
        Self::Decode(cause.into())
    }

    /// Helper: build an `Upstream` error from the reported message.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Returns true if retrying the same request later could plausibly succeed.
    ///
    /// The gateway itself never retries; this is exposed for callers that log
    /// or alert on upstream health.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Transport(_) => true,
            Self::Status { status } => *status >= 500 || *status == 429,
            Self::Decode(_) | Self::Upstream(_) => false,
        }
    }
}

/// Unified error type for gateway construction and configuration.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NspdError {
    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An upstream fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl NspdError {
    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }
}
