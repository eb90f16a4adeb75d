use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::transport::TransportConfig;

pub const DEFAULT_DOH_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

/// Configuration of one named socket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SocketConfig {
    /// Driver name: "doh", "system" or any driver registered at runtime.
    pub driver: String,

    /// DoH API endpoint. Falls back to Cloudflare when absent.
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub transport: TransportConfig,
}

impl SocketConfig {
    pub fn new(driver: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            endpoint: None,
            transport: TransportConfig::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    pub fn doh() -> Self {
        Self::new("doh").with_endpoint(DEFAULT_DOH_ENDPOINT)
    }

    pub fn system() -> Self {
        Self::new("system")
    }
}

/// DNS socket configuration: which socket is the default and how every
/// named socket is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsConfig {
    #[serde(default = "default_socket_name")]
    pub default: String,

    #[serde(default = "default_sockets")]
    pub sockets: BTreeMap<String, SocketConfig>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            default: default_socket_name(),
            sockets: default_sockets(),
        }
    }
}

impl DnsConfig {
    /// Empty configuration with the given default socket name and no sockets.
    pub fn empty(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            sockets: BTreeMap::new(),
        }
    }

    pub fn with_socket(mut self, name: impl Into<String>, socket: SocketConfig) -> Self {
        self.sockets.insert(name.into(), socket);
        self
    }

    pub fn socket(&self, name: &str) -> Option<&SocketConfig> {
        self.sockets.get(name)
    }
}

fn default_socket_name() -> String {
    "doh".to_string()
}

fn default_sockets() -> BTreeMap<String, SocketConfig> {
    let doh = SocketConfig::doh().with_transport(TransportConfig {
        connect_timeout_ms: Some(0),
        timeout_ms: Some(0),
        ..TransportConfig::default()
    });

    let mut sockets = BTreeMap::new();
    sockets.insert("doh".to_string(), doh);
    sockets.insert("system".to_string(), SocketConfig::system());
    sockets
}
