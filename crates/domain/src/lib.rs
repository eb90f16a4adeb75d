//! dnsock domain layer
pub mod config;
pub mod dns_reply;
pub mod errors;
pub mod query_options;
pub mod question;
pub mod record_type;

pub use config::{CliOverrides, Config, ConfigError, DnsConfig, SocketConfig, TransportConfig};
pub use dns_reply::HttpReply;
pub use errors::DomainError;
pub use query_options::{EmptyNamePolicy, QueryOptions, DNS_JSON_CONTENT_TYPE};
pub use question::{Lookup, Question, DEFAULT_RECORD_TYPE};
pub use record_type::{RecordType, RRSIG_TYPE_CODE};
