use super::Socket;
use dnsock_domain::DomainError;
use std::sync::Arc;

/// Hands out sockets by configured name.
pub trait SocketFactory: Send + Sync {
    /// Socket registered under `name`, or the default socket when `None`.
    fn socket(&self, name: Option<&str>) -> Result<Arc<dyn Socket>, DomainError>;

    fn default_socket(&self) -> String;
}
