use serde::{Deserialize, Serialize};

/// Media type of the JSON profile spoken by DoH APIs such as Cloudflare's.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// What to do with a question whose name is empty when errors are not
/// being thrown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyNamePolicy {
    /// Send nothing and report a `null` answer at that position.
    #[default]
    Null,
    /// Send the request anyway, without a `name` query parameter, and let the
    /// upstream decide.
    Forward,
}

/// Per-call options recognised by the sockets.
///
/// Field names on the wire follow the option names of the JSON DoH API
/// (`do`, `cd`, `ct`) so a serialized options document reads the same as
/// the request it produces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Dispatch every request concurrently and hand back pending answers.
    #[serde(rename = "async")]
    pub run_async: bool,

    /// Surface HTTP and JSON failures instead of turning them into `null`.
    #[serde(rename = "throwOnError", alias = "throw_on_error")]
    pub throw_on_error: bool,

    /// Ask for DNSSEC records (`do=1`).
    #[serde(rename = "do")]
    pub dnssec_ok: bool,

    /// Ask the upstream to skip DNSSEC validation (`cd=1`).
    #[serde(rename = "cd")]
    pub checking_disabled: bool,

    pub accept: String,

    /// Sent both as the `Content-Type` header and the `ct` parameter.
    #[serde(rename = "ct")]
    pub content_type: String,

    pub empty_name: EmptyNamePolicy,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            run_async: true,
            throw_on_error: true,
            dnssec_ok: false,
            checking_disabled: true,
            accept: DNS_JSON_CONTENT_TYPE.to_string(),
            content_type: DNS_JSON_CONTENT_TYPE.to_string(),
            empty_name: EmptyNamePolicy::Null,
        }
    }
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `with_async(false)`.
    pub fn sync() -> Self {
        Self::default().with_async(false)
    }

    pub fn with_async(mut self, run_async: bool) -> Self {
        self.run_async = run_async;
        self
    }

    pub fn with_throw_on_error(mut self, throw_on_error: bool) -> Self {
        self.throw_on_error = throw_on_error;
        self
    }

    pub fn with_dnssec(mut self, dnssec_ok: bool) -> Self {
        self.dnssec_ok = dnssec_ok;
        self
    }

    pub fn with_checking_disabled(mut self, checking_disabled: bool) -> Self {
        self.checking_disabled = checking_disabled;
        self
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_empty_name(mut self, policy: EmptyNamePolicy) -> Self {
        self.empty_name = policy;
        self
    }
}
