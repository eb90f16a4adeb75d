use crate::ports::{PendingAnswers, QueryResult, Socket, SocketFactory};
use dnsock_domain::{DomainError, Lookup, QueryOptions};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Entry point for callers that do not care which socket answers: every
/// call goes to the factory's current default socket.
#[derive(Clone)]
pub struct Dns {
    factory: Arc<dyn SocketFactory>,
}

impl Dns {
    pub fn new(factory: Arc<dyn SocketFactory>) -> Self {
        Self { factory }
    }

    /// A specific socket, bypassing the default.
    pub fn socket(&self, name: Option<&str>) -> Result<Arc<dyn Socket>, DomainError> {
        self.factory.socket(name)
    }

    pub async fn query(
        &self,
        lookup: impl Into<Lookup>,
        options: &QueryOptions,
    ) -> Result<QueryResult, DomainError> {
        let socket = self.factory.socket(None)?;
        debug!(socket = %socket.name(), driver = %socket.driver(), "Forwarding query to default socket");
        socket.query(lookup.into(), options).await
    }

    /// Waits for the answers of an asynchronous query.
    pub async fn unwrap(
        &self,
        pending: PendingAnswers,
        throw_on_error: bool,
    ) -> Result<Vec<Option<Value>>, DomainError> {
        pending.join(throw_on_error).await
    }
}
