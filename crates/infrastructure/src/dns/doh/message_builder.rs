//! DoH Message Builder
//!
//! Turns DNS questions into GET requests for the JSON DoH API:
//!
//! ```text
//! GET {endpoint}?name={name}&type={type}[&do=1][&cd=1]&ct=application/dns-json
//! Accept: application/dns-json
//! Content-Type: application/dns-json
//! ```

use dnsock_domain::{DomainError, EmptyNamePolicy, QueryOptions, Question};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Request, Url};
use std::iter::FusedIterator;
use std::slice;

/// Builds DoH GET requests against one endpoint
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    client: Client,
    endpoint: Url,
}

impl MessageBuilder {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build one request.
    ///
    /// Parameters without a value are left out of the query string:
    /// `do` and `cd` only appear as `=1`, never as `=0`. The record type is
    /// upper-cased so mnemonics match regardless of the caller's casing.
    pub fn make_message(
        &self,
        name: &str,
        record_type: &str,
        dnssec_ok: bool,
        checking_disabled: bool,
        accept: &str,
        content_type: &str,
    ) -> Result<Request, DomainError> {
        let mut url = self.endpoint.clone();
        {
            let mut params = url.query_pairs_mut();
            if !name.is_empty() {
                params.append_pair("name", name);
            }
            if !record_type.is_empty() {
                params.append_pair("type", &record_type.to_ascii_uppercase());
            }
            if dnssec_ok {
                params.append_pair("do", "1");
            }
            if checking_disabled {
                params.append_pair("cd", "1");
            }
            if !content_type.is_empty() {
                params.append_pair("ct", content_type);
            }
        }

        self.client
            .get(url)
            .header(ACCEPT, accept)
            .header(CONTENT_TYPE, content_type)
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to build DoH request: {}", e)))
    }

    /// Lazily build one request per question, in question order.
    pub fn messages<'a>(&'a self, questions: &'a [Question], options: &'a QueryOptions) -> Messages<'a> {
        Messages {
            builder: self,
            questions: questions.iter(),
            options,
            exhausted: false,
        }
    }
}

/// Single-pass sequence of DoH requests.
///
/// Each item is `Ok(Some(request))`, or `Ok(None)` for a question that is
/// answered with `null` without being sent (empty name, errors suppressed,
/// [`EmptyNamePolicy::Null`]). The first error ends the sequence: questions
/// after it are never built.
pub struct Messages<'a> {
    builder: &'a MessageBuilder,
    questions: slice::Iter<'a, Question>,
    options: &'a QueryOptions,
    exhausted: bool,
}

impl Iterator for Messages<'_> {
    type Item = Result<Option<Request>, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let question = self.questions.next()?;

        if question.has_empty_name() {
            if self.options.throw_on_error {
                self.exhausted = true;
                return Some(Err(DomainError::InvalidName));
            }
            if self.options.empty_name == EmptyNamePolicy::Null {
                return Some(Ok(None));
            }
        }

        let message = self.builder.make_message(
            &question.name,
            question.effective_type(),
            self.options.dnssec_ok,
            self.options.checking_disabled,
            &self.options.accept,
            &self.options.content_type,
        );
        if message.is_err() {
            self.exhausted = true;
        }

        Some(message.map(Some))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            (0, Some(self.questions.len()))
        }
    }
}

impl FusedIterator for Messages<'_> {}
