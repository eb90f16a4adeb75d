use dnsock_domain::{DomainError, HttpReply};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Deepest array/object nesting accepted in a DoH reply.
pub const MAX_JSON_DEPTH: usize = 512;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a DoH reply into the upstream's JSON document.
    ///
    /// A non-2xx reply, or a 2xx reply without a body (204), carries no
    /// usable answer and yields `None` whatever `throw_on_error` says. A
    /// body that is not JSON fails with `MalformedResponse` when throwing
    /// and yields `None` otherwise. Documents nested deeper than
    /// [`MAX_JSON_DEPTH`] are treated as malformed.
    pub fn handle_response(
        reply: &HttpReply,
        throw_on_error: bool,
    ) -> Result<Option<Value>, DomainError> {
        if !reply.is_success() {
            debug!(status = reply.status, "DoH reply without usable answer");
            return Ok(None);
        }
        if reply.body.is_empty() {
            return Ok(None);
        }

        match decode(&reply.body) {
            Ok(Value::Null) => Ok(None),
            Ok(document) => Ok(Some(document)),
            Err(e) if throw_on_error => Err(DomainError::MalformedResponse(e)),
            Err(e) => {
                debug!(error = %e, body_len = reply.body.len(), "Discarding malformed DoH reply");
                Ok(None)
            }
        }
    }

    /// Reads status and body off a transport response.
    pub async fn read_reply(response: reqwest::Response) -> Result<HttpReply, reqwest::Error> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(HttpReply::new(status, body))
    }
}

fn decode(body: &[u8]) -> Result<Value, String> {
    if exceeds_depth(body, MAX_JSON_DEPTH) {
        return Err(format!("nesting deeper than {} levels", MAX_JSON_DEPTH));
    }

    let mut deserializer = serde_json::Deserializer::from_slice(body);
    deserializer.disable_recursion_limit();
    let document = Value::deserialize(&mut deserializer).map_err(|e| e.to_string())?;
    deserializer.end().map_err(|e| e.to_string())?;
    Ok(document)
}

/// Bracket nesting outside string literals; stops as soon as `limit` is passed.
fn exceeds_depth(body: &[u8], limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &byte in body {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    false
}
