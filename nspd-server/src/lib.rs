//! nspd-server: REST front end for the cadastral gateway.
//!
//! Routes:
//! - `GET /health`
//! - `POST /search` with `{"cadastral_number": "..."}`
//! - `GET /search/:cadastral_number`

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use router::build_router;
pub use state::AppState;
