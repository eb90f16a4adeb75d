#![allow(dead_code)]
use async_trait::async_trait;
use dnsock_application::ports::{QueryResult, Socket};
use dnsock_domain::{DomainError, Lookup, QueryOptions};
use serde_json::json;

/// Custom driver used to exercise `SocketManager::extend`: answers every
/// question with its socket name, driver and endpoint.
pub struct StaticSocket {
    name: String,
    driver: String,
    endpoint: Option<String>,
}

impl StaticSocket {
    pub fn new(name: &str, driver: &str, endpoint: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            driver: driver.to_string(),
            endpoint,
        }
    }
}

#[async_trait]
impl Socket for StaticSocket {
    fn name(&self) -> &str {
        &self.name
    }

    fn driver(&self) -> &str {
        &self.driver
    }

    async fn query(
        &self,
        lookup: Lookup,
        _options: &QueryOptions,
    ) -> Result<QueryResult, DomainError> {
        let answers = lookup
            .into_questions()
            .into_iter()
            .map(|q| {
                Some(json!({
                    "socket": self.name,
                    "driver": self.driver,
                    "endpoint": self.endpoint,
                    "name": q.name,
                }))
            })
            .collect();
        Ok(QueryResult::Answers(answers))
    }
}
