use super::PendingAnswers;
use async_trait::async_trait;
use dnsock_domain::{DomainError, Lookup, QueryOptions};
use serde_json::Value;

/// Outcome of a socket query.
///
/// Answers are positionally aligned with the questions of the lookup. Their
/// shape depends on the driver: DoH answers are the upstream's JSON document
/// (`Status`, `Answer`, ...), system answers are per-record objects keyed by
/// record type (`ip`, `ipv6`, `txt`, ...). The two are deliberately not
/// unified.
#[derive(Debug)]
pub enum QueryResult {
    Answers(Vec<Option<Value>>),
    Pending(PendingAnswers),
}

impl QueryResult {
    pub fn len(&self) -> usize {
        match self {
            QueryResult::Answers(answers) => answers.len(),
            QueryResult::Pending(pending) => pending.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, QueryResult::Pending(_))
    }

    /// Resolved answers, or `None` when the query is still pending.
    pub fn into_answers(self) -> Option<Vec<Option<Value>>> {
        match self {
            QueryResult::Answers(answers) => Some(answers),
            QueryResult::Pending(_) => None,
        }
    }

    /// Resolved answers, awaiting pending ones first.
    pub async fn resolve(self, throw_on_error: bool) -> Result<Vec<Option<Value>>, DomainError> {
        match self {
            QueryResult::Answers(answers) => Ok(answers),
            QueryResult::Pending(pending) => pending.join(throw_on_error).await,
        }
    }
}

/// A named resolver bound to one transport configuration.
///
/// Implementations hold no per-call state and are shared across callers.
#[async_trait]
pub trait Socket: Send + Sync {
    /// Name the socket was configured under.
    fn name(&self) -> &str;

    fn driver(&self) -> &str;

    /// Looks up one name, or an ordered batch of questions.
    ///
    /// For a single name the record type of the lookup applies; for a batch
    /// each question carries its own.
    async fn query(&self, lookup: Lookup, options: &QueryOptions)
        -> Result<QueryResult, DomainError>;
}
