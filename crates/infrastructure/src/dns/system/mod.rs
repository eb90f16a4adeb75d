//! Host resolver socket
//!
//! Looks names up through the host's resolver configuration
//! (`/etc/resolv.conf` and friends). No HTTP, no fan-out: questions are
//! resolved one after another and the DNSSEC flags are accepted but unused.

pub mod record_type_map;

pub use record_type_map::{record_to_value, RecordTypeMapper};

use async_trait::async_trait;
use dnsock_application::ports::{QueryResult, Socket};
use dnsock_domain::{DomainError, Lookup, QueryOptions, Question, RecordType};
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, warn};

pub const DRIVER_NAME: &str = "system";

pub struct SystemSocket {
    name: String,
    resolver: TokioResolver,
}

impl SystemSocket {
    /// Builds a resolver from the host configuration, falling back to
    /// hickory's defaults when it cannot be read.
    pub fn new(name: impl Into<String>) -> Self {
        let builder = match TokioResolver::builder_tokio() {
            Ok(builder) => {
                debug!("Using system DNS configuration");
                builder
            }
            Err(e) => {
                warn!(error = %e, "Failed to read system DNS config, using defaults");
                TokioResolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
            }
        };

        Self {
            name: name.into(),
            resolver: builder.build(),
        }
    }

    /// Resolves one name, returning one entry per record.
    ///
    /// A name that exists without records of the requested type yields an
    /// empty list. Any other resolver failure is a `Lookup` error.
    pub async fn lookup(&self, name: &str, record_type: &str) -> Result<Vec<Value>, DomainError> {
        let mapped = RecordTypeMapper::to_hickory(RecordType::from_str(record_type)?);
        debug!(socket = %self.name, name = %name, record_type = %mapped, "System lookup");

        match self.resolver.lookup(name, mapped).await {
            Ok(lookup) => {
                let records: Vec<Value> = lookup.record_iter().map(record_to_value).collect();
                debug!(name = %name, records = records.len(), "System lookup complete");
                Ok(records)
            }
            Err(e) if e.is_no_records_found() => {
                debug!(name = %name, "No records found");
                Ok(Vec::new())
            }
            Err(e) => Err(DomainError::Lookup(format!("{}: {}", name, e))),
        }
    }

    /// Answers one question under `options`.
    ///
    /// `Ok(None)` means the question was skipped or failed with errors
    /// suppressed. Unsupported record types fail either way.
    async fn answer(
        &self,
        question: &Question,
        options: &QueryOptions,
    ) -> Result<Option<Vec<Value>>, DomainError> {
        if question.has_empty_name() {
            if options.throw_on_error {
                return Err(DomainError::InvalidName);
            }
            return Ok(None);
        }

        match self.lookup(&question.name, question.effective_type()).await {
            Ok(records) => Ok(Some(records)),
            Err(e @ DomainError::UnsupportedRecordType(_)) => Err(e),
            Err(e) if options.throw_on_error => Err(e),
            Err(e) => {
                warn!(socket = %self.name, name = %question.name, error = %e, "System lookup failed, answering null");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl Socket for SystemSocket {
    fn name(&self) -> &str {
        &self.name
    }

    fn driver(&self) -> &str {
        DRIVER_NAME
    }

    async fn query(
        &self,
        lookup: Lookup,
        options: &QueryOptions,
    ) -> Result<QueryResult, DomainError> {
        let is_batch = lookup.is_batch();
        let questions = lookup.into_questions();

        if !is_batch {
            let records = match questions.first() {
                Some(question) => self.answer(question, options).await?,
                None => None,
            };
            let answers = records
                .unwrap_or_default()
                .into_iter()
                .map(Some)
                .collect();
            return Ok(QueryResult::Answers(answers));
        }

        let mut answers = Vec::with_capacity(questions.len());
        for question in &questions {
            let options = question.options.as_ref().unwrap_or(options);
            let records = self.answer(question, options).await?;
            answers.push(records.map(Value::Array));
        }

        Ok(QueryResult::Answers(answers))
    }
}
