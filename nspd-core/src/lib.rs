//! nspd-core
//!
//! Core traits and the response normalizer shared across the NSPD gateway.
//!
//! - `connector`: the `RegistryConnector` trait implemented by upstream clients.
//! - `document`: the untrusted `RawDocument` returned by a connector.
//! - `normalize`: collapses a fetch result into a stable `SearchReport`.
//!
//! The normalizer never talks to the network. Connectors and the normalizer
//! meet only at `Result<RawDocument, FetchError>`, which keeps every shape
//! rule testable with plain JSON values.
#![warn(missing_docs)]

/// Upstream client contract.
pub mod connector;
/// Raw upstream payload wrapper.
pub mod document;
/// Response normalization: shape resolution, field precedence and mapping.
pub mod normalize;
pub mod types;

pub use connector::RegistryConnector;
pub use document::RawDocument;
pub use normalize::{DocumentShape, normalize, normalize_document};
pub use types::*;
