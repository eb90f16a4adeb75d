//! Configuration module for dnsock
//!
//! - `root`: Main configuration, loading and CLI overrides
//! - `dns`: Default socket and per-socket driver settings
//! - `transport`: HTTP client tuning for DoH sockets
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod transport;

pub use dns::{DnsConfig, SocketConfig, DEFAULT_DOH_ENDPOINT};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use transport::TransportConfig;
