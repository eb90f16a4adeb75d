//! DNS-over-HTTPS socket (JSON API profile)
//!
//! Questions become GET requests against a JSON DoH endpoint such as
//! Cloudflare's `https://cloudflare-dns.com/dns-query`. A batch is either
//! sent one request at a time (sync) or fanned out onto the runtime at once
//! (async), in which case the caller gets [`PendingAnswers`] back.

pub mod message_builder;
pub mod response_parser;

pub use message_builder::{MessageBuilder, Messages};
pub use response_parser::ResponseParser;

use async_trait::async_trait;
use dnsock_application::ports::{PendingAnswers, QueryResult, Socket};
use dnsock_domain::config::DEFAULT_DOH_ENDPOINT;
use dnsock_domain::{DomainError, HttpReply, Lookup, QueryOptions, Question};
use reqwest::{Client, Request, Url};
use serde_json::Value;
use tracing::{debug, warn};

pub const DRIVER_NAME: &str = "doh";

pub struct DohSocket {
    name: String,
    client: Client,
    builder: MessageBuilder,
}

impl DohSocket {
    /// Creates a socket bound to `endpoint`, or to Cloudflare when `None`.
    pub fn new(
        name: impl Into<String>,
        client: Client,
        endpoint: Option<&str>,
    ) -> Result<Self, DomainError> {
        let endpoint = endpoint.unwrap_or(DEFAULT_DOH_ENDPOINT);
        let url = Url::parse(endpoint)
            .map_err(|e| DomainError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        Ok(Self {
            name: name.into(),
            builder: MessageBuilder::new(client.clone(), url),
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        self.builder.endpoint()
    }

    pub fn message_builder(&self) -> &MessageBuilder {
        &self.builder
    }

    pub fn handle_response(
        &self,
        reply: &HttpReply,
        throw_on_error: bool,
    ) -> Result<Option<Value>, DomainError> {
        ResponseParser::handle_response(reply, throw_on_error)
    }

    /// Waits for the answers of an async query, in question order.
    pub async fn unwrap(
        &self,
        pending: PendingAnswers,
        throw_on_error: bool,
    ) -> Result<Vec<Option<Value>>, DomainError> {
        debug!(socket = %self.name, pending = pending.len(), "Unwrapping pending DoH answers");
        pending.join(throw_on_error).await
    }

    async fn send_requests(
        &self,
        questions: &[Question],
        options: &QueryOptions,
    ) -> Result<QueryResult, DomainError> {
        let throw_on_error = options.throw_on_error;

        debug!(
            socket = %self.name,
            endpoint = %self.builder.endpoint(),
            questions = questions.len(),
            run_async = options.run_async,
            throw_on_error,
            "Sending DoH questions"
        );

        if options.run_async {
            let mut pending = PendingAnswers::with_capacity(
                ResponseParser::handle_response,
                questions.len(),
            );
            for message in self.builder.messages(questions, options) {
                match message? {
                    Some(request) => pending.push(tokio::spawn(send_message(
                        self.client.clone(),
                        request,
                        throw_on_error,
                    ))),
                    None => pending.push_empty(),
                }
            }
            return Ok(QueryResult::Pending(pending));
        }

        let mut answers = Vec::with_capacity(questions.len());
        for message in self.builder.messages(questions, options) {
            let answer = match message? {
                Some(request) => {
                    match send_message(self.client.clone(), request, throw_on_error).await? {
                        Some(reply) => ResponseParser::handle_response(&reply, throw_on_error)?,
                        None => None,
                    }
                }
                None => None,
            };
            answers.push(answer);
        }

        Ok(QueryResult::Answers(answers))
    }
}

#[async_trait]
impl Socket for DohSocket {
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
        let questions = lookup.into_questions();
        self.send_requests(&questions, options).await
    }
}

/// Sends one request and reads the reply.
///
/// With `throw_on_error` set, transport failures and 4xx/5xx statuses fail
/// the question. Otherwise the status is never raised here and a transport
/// failure yields `None`.
async fn send_message(
    client: Client,
    request: Request,
    throw_on_error: bool,
) -> Result<Option<HttpReply>, DomainError> {
    let url = request.url().to_string();
    debug!(url = %url, "Sending DoH query");

    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) if throw_on_error => {
            return Err(DomainError::Transport(format!(
                "DoH request to {} failed: {}",
                url, e
            )))
        }
        Err(e) => {
            warn!(url = %url, error = %e, "DoH request failed, answering null");
            return Ok(None);
        }
    };

    let status = response.status();
    if throw_on_error && (status.is_client_error() || status.is_server_error()) {
        return Err(DomainError::UpstreamError {
            url,
            status: status.as_u16(),
        });
    }

    match ResponseParser::read_reply(response).await {
        Ok(reply) => {
            debug!(
                url = %url,
                status = reply.status,
                response_len = reply.body.len(),
                "DoH response received"
            );
            Ok(Some(reply))
        }
        Err(e) if throw_on_error => Err(DomainError::Transport(format!(
            "Failed to read DoH response from {}: {}",
            url, e
        ))),
        Err(e) => {
            warn!(url = %url, error = %e, "Failed to read DoH response, answering null");
            Ok(None)
        }
    }
}
