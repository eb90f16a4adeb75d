#![allow(dead_code)]

use async_trait::async_trait;
use dnsock_application::ports::{QueryResult, Socket, SocketFactory};
use dnsock_domain::{DomainError, Lookup, QueryOptions};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Socket
// ============================================================================

/// Answers every question with `{"socket": <name>, "name": <question name>}`
/// and records the lookups it received.
pub struct MockSocket {
    name: String,
    calls: Mutex<Vec<Lookup>>,
}

impl MockSocket {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Lookup> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Socket for MockSocket {
    fn name(&self) -> &str {
        &self.name
    }

    fn driver(&self) -> &str {
        "mock"
    }

    async fn query(
        &self,
        lookup: Lookup,
        _options: &QueryOptions,
    ) -> Result<QueryResult, DomainError> {
        self.calls.lock().unwrap().push(lookup.clone());

        let answers = lookup
            .into_questions()
            .into_iter()
            .map(|q| Some(json!({ "socket": self.name, "name": q.name })))
            .collect();

        Ok(QueryResult::Answers(answers))
    }
}

// ============================================================================
// Mock SocketFactory
// ============================================================================

pub struct MockFactory {
    default: Mutex<String>,
    sockets: HashMap<String, Arc<MockSocket>>,
}

impl MockFactory {
    pub fn new(default: &str, sockets: Vec<Arc<MockSocket>>) -> Arc<Self> {
        Arc::new(Self {
            default: Mutex::new(default.to_string()),
            sockets: sockets
                .into_iter()
                .map(|s| (s.name().to_string(), s))
                .collect(),
        })
    }

    pub fn set_default(&self, name: &str) {
        *self.default.lock().unwrap() = name.to_string();
    }
}

impl SocketFactory for MockFactory {
    fn socket(&self, name: Option<&str>) -> Result<Arc<dyn Socket>, DomainError> {
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| self.default_socket());

        self.sockets
            .get(&name)
            .map(|s| Arc::clone(s) as Arc<dyn Socket>)
            .ok_or(DomainError::UnknownSocket(name))
    }

    fn default_socket(&self) -> String {
        self.default.lock().unwrap().clone()
    }
}
