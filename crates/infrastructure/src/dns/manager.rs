//! Socket registry
//!
//! Resolves configured socket names to driver instances and caches them.
//! Drivers are picked by the `driver` field of the socket's configuration:
//! creators registered through [`SocketManager::extend`] are consulted
//! first, then the built-in `doh` and `system` drivers.

use arc_swap::ArcSwap;
use dashmap::DashMap;
use dnsock_application::ports::{Socket, SocketFactory};
use dnsock_domain::{DnsConfig, DomainError, SocketConfig};
use std::sync::Arc;
use tracing::{debug, info};

/// Builds a socket from its name and configuration.
pub type SocketCreator =
    Arc<dyn Fn(&str, &SocketConfig) -> Result<Arc<dyn Socket>, DomainError> + Send + Sync>;

pub struct SocketManager {
    config: DnsConfig,
    default_socket: ArcSwap<String>,
    sockets: DashMap<String, Arc<dyn Socket>>,
    custom_creators: DashMap<String, SocketCreator>,
}

impl SocketManager {
    pub fn new(config: DnsConfig) -> Self {
        let default_socket = ArcSwap::from_pointee(config.default.clone());
        Self {
            config,
            default_socket,
            sockets: DashMap::new(),
            custom_creators: DashMap::new(),
        }
    }

    pub fn config(&self) -> &DnsConfig {
        &self.config
    }

    /// The named socket, or the default one when `name` is `None`.
    ///
    /// Sockets are built on first use and the same instance is returned
    /// until it is purged.
    pub fn socket(&self, name: Option<&str>) -> Result<Arc<dyn Socket>, DomainError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.default_socket(),
        };

        if let Some(socket) = self.sockets.get(&name) {
            return Ok(Arc::clone(socket.value()));
        }

        let socket = self.resolve(&name)?;
        let socket = self.sockets.entry(name).or_insert(socket);
        Ok(Arc::clone(socket.value()))
    }

    fn resolve(&self, name: &str) -> Result<Arc<dyn Socket>, DomainError> {
        let config = self
            .config
            .socket(name)
            .ok_or_else(|| DomainError::UnknownSocket(name.to_string()))?;

        debug!(socket = %name, driver = %config.driver, "Creating DNS socket");

        let creator = self
            .custom_creators
            .get(&config.driver)
            .map(|creator| Arc::clone(creator.value()));
        if let Some(creator) = creator {
            return creator(name, config);
        }

        match config.driver.as_str() {
            #[cfg(feature = "dns-over-https")]
            crate::dns::doh::DRIVER_NAME => create_doh_driver(name, config),
            #[cfg(feature = "system-resolver")]
            crate::dns::system::DRIVER_NAME => create_system_driver(name),
            other => Err(DomainError::UnsupportedDriver(other.to_string())),
        }
    }

    /// Registers a driver constructor, replacing a built-in of the same name.
    pub fn extend<F>(&self, driver: impl Into<String>, creator: F) -> &Self
    where
        F: Fn(&str, &SocketConfig) -> Result<Arc<dyn Socket>, DomainError> + Send + Sync + 'static,
    {
        let driver = driver.into();
        info!(driver = %driver, "Registering custom DNS driver");
        self.custom_creators.insert(driver, Arc::new(creator));
        self
    }

    /// Drops a cached socket (the default one when `name` is `None`) so the
    /// next request rebuilds it.
    pub fn purge(&self, name: Option<&str>) {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.default_socket(),
        };
        if self.sockets.remove(&name).is_some() {
            debug!(socket = %name, "Purged DNS socket");
        }
    }

    pub fn forget_sockets(&self) -> &Self {
        self.sockets.clear();
        self
    }

    pub fn default_socket(&self) -> String {
        self.default_socket.load().as_ref().clone()
    }

    pub fn set_default_socket(&self, name: impl Into<String>) {
        let name = name.into();
        debug!(socket = %name, "Default DNS socket changed");
        self.default_socket.store(Arc::new(name));
    }
}

impl SocketFactory for SocketManager {
    fn socket(&self, name: Option<&str>) -> Result<Arc<dyn Socket>, DomainError> {
        SocketManager::socket(self, name)
    }

    fn default_socket(&self) -> String {
        SocketManager::default_socket(self)
    }
}

#[cfg(feature = "dns-over-https")]
fn create_doh_driver(name: &str, config: &SocketConfig) -> Result<Arc<dyn Socket>, DomainError> {
    let client = crate::dns::transport::build_client(&config.transport)?;
    let socket = crate::dns::doh::DohSocket::new(name, client, config.endpoint.as_deref())?;
    Ok(Arc::new(socket))
}

#[cfg(feature = "system-resolver")]
fn create_system_driver(name: &str) -> Result<Arc<dyn Socket>, DomainError> {
    Ok(Arc::new(crate::dns::system::SystemSocket::new(name)))
}
