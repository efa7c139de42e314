//! Re-export of foundational types from `nspd-types`.
// Consolidated re-exports so downstream crates can depend on `nspd-core` only

pub use nspd_types::{AreaType, ParcelRecord};
pub use nspd_types::{ConnectorKey, FetchError, NspdError};
pub use nspd_types::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GatewayConfig, TlsVerification, UpstreamConfig};
pub use nspd_types::{LookupFailure, Outcome, SearchReport};
