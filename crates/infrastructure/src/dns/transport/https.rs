use dnsock_domain::{DomainError, TransportConfig};
use std::time::Duration;
use tracing::debug;

/// Connect timeout used when the socket configuration does not set one.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(60);

pub const DEFAULT_USER_AGENT: &str = concat!("dnsock/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by every request of one DoH socket.
///
/// HTTP/2 is negotiated through ALPN on TLS endpoints; `http2_prior_knowledge`
/// forces it, which also allows cleartext h2c endpoints.
pub fn build_client(config: &TransportConfig) -> Result<reqwest::Client, DomainError> {
    let mut builder = reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));

    match config.connect_timeout_ms {
        None => builder = builder.connect_timeout(DEFAULT_CONNECT_TIMEOUT),
        Some(0) => {}
        Some(ms) => builder = builder.connect_timeout(Duration::from_millis(ms)),
    }

    if let Some(ms) = config.timeout_ms.filter(|ms| *ms > 0) {
        builder = builder.timeout(Duration::from_millis(ms));
    }

    if !config.verify_tls {
        builder = builder.danger_accept_invalid_certs(true);
    }

    if config.http2_prior_knowledge {
        builder = builder.http2_prior_knowledge();
    }

    if let Some(idle) = config.pool_max_idle_per_host {
        builder = builder.pool_max_idle_per_host(idle);
    }

    debug!(
        connect_timeout_ms = ?config.connect_timeout_ms,
        timeout_ms = ?config.timeout_ms,
        verify_tls = config.verify_tls,
        http2_prior_knowledge = config.http2_prior_knowledge,
        "Building DoH HTTP client"
    );

    builder
        .build()
        .map_err(|e| DomainError::Transport(format!("Failed to build HTTP client: {}", e)))
}
