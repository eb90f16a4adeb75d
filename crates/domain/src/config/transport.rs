use serde::{Deserialize, Serialize};

/// HTTP client tuning for a DoH socket.
///
/// Timeouts are in milliseconds; `0` disables the timeout entirely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransportConfig {
    /// Connect timeout. When absent the client uses 60 seconds.
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,

    /// Whole-request timeout. When absent requests never time out.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Verify the upstream TLS certificate (default: true)
    #[serde(default = "default_true")]
    pub verify_tls: bool,

    /// Skip ALPN and speak HTTP/2 straight away, also over plain HTTP.
    #[serde(default)]
    pub http2_prior_knowledge: bool,

    #[serde(default)]
    pub pool_max_idle_per_host: Option<usize>,

    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: None,
            timeout_ms: None,
            verify_tls: true,
            http2_prior_knowledge: false,
            pool_max_idle_per_host: None,
            user_agent: None,
        }
    }
}

fn default_true() -> bool {
    true
}
