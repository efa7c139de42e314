//! nspd looks up land parcels in the Russian NSPD cadastral registry and
//! returns them in a stable, flat schema.
//!
//! Overview
//! - A [`Gateway`] owns one `RegistryConnector` (the live `nspd-client`
//!   connector, or `nspd-mock` in tests) and a request deadline.
//! - [`Gateway::search`] fetches the raw upstream document and normalizes it
//!   into a [`SearchReport`]: either a [`ParcelRecord`] plus pass-through
//!   geometry, or one of two caller-facing failures.
//!
//! Key behaviors
//! - Upstream failures of any kind (transport, non-200, bad JSON, timeout,
//!   `error` payload) collapse to `"Object not found"`; the cause is kept in
//!   `SearchReport::warnings` for logging and is never serialized.
//! - A well-formed answer without features yields `"No features found"`.
//! - Only the first feature is used.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use nspd::Gateway;
//!
//! let gateway = Gateway::builder()
//!     .with_connector(Arc::new(nspd_client::NspdConnector::new_default()?))
//!     .build()?;
//! let report = gateway.search("50:27:0030526:16").await;
//! println!("{}", serde_json::to_string(&report)?);
//! ```
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Gateway, GatewayBuilder};

// Re-export core types for convenience
pub use nspd_core::{
    AreaType, ConnectorKey, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FetchError, GatewayConfig,
    LookupFailure, NspdError, Outcome, ParcelRecord, RawDocument, RegistryConnector,
    SearchReport, TlsVerification, UpstreamConfig, normalize,
};
