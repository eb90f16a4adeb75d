use dnsock_domain::{DomainError, HttpReply};
use futures::future::join_all;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::debug;

/// An in-flight request. Resolves to `None` when the transport failed and
/// errors were suppressed for the call that dispatched it.
pub type ReplyTask = JoinHandle<Result<Option<HttpReply>, DomainError>>;

/// Turns a completed reply into an answer; supplied by the socket that
/// dispatched the requests.
pub type ReplyDecoder = fn(&HttpReply, bool) -> Result<Option<Value>, DomainError>;

/// Answers of an asynchronous query, one slot per question in question
/// order.
///
/// Requests are already running on the runtime when this is handed out.
/// Dropping it detaches them; they run to completion or transport timeout.
#[derive(Debug)]
pub struct PendingAnswers {
    slots: Vec<Option<ReplyTask>>,
    decoder: ReplyDecoder,
}

impl PendingAnswers {
    pub fn new(decoder: ReplyDecoder) -> Self {
        Self {
            slots: Vec::new(),
            decoder,
        }
    }

    pub fn with_capacity(decoder: ReplyDecoder, capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            decoder,
        }
    }

    pub fn push(&mut self, task: ReplyTask) {
        self.slots.push(Some(task));
    }

    /// Reserves a slot that resolves to `null` without any request behind it.
    pub fn push_empty(&mut self) {
        self.slots.push(None);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Waits for every request and decodes the replies, keeping the
    /// question order no matter which request finished first.
    ///
    /// The first failure, in slot order, is returned.
    pub async fn join(self, throw_on_error: bool) -> Result<Vec<Option<Value>>, DomainError> {
        let decoder = self.decoder;
        let total = self.slots.len();

        let outcomes = join_all(self.slots.into_iter().map(|slot| async move {
            match slot {
                Some(task) => Some(task.await),
                None => None,
            }
        }))
        .await;

        let mut answers = Vec::with_capacity(total);
        for outcome in outcomes {
            let answer = match outcome {
                None | Some(Ok(Ok(None))) => None,
                Some(Ok(Ok(Some(reply)))) => decoder(&reply, throw_on_error)?,
                Some(Ok(Err(e))) => return Err(e),
                Some(Err(e)) => return Err(DomainError::TaskFailed(e.to_string())),
            };
            answers.push(answer);
        }

        debug!(answers = answers.len(), "Pending answers resolved");
        Ok(answers)
    }
}
