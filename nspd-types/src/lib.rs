//! NSPD-specific data transfer objects, errors and configuration primitives.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod record;
mod reports;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GatewayConfig, TlsVerification, UpstreamConfig};
pub use connector::ConnectorKey;
pub use error::{FetchError, NspdError};
pub use record::{AreaType, ParcelRecord};
pub use reports::{LookupFailure, Outcome, SearchReport};
