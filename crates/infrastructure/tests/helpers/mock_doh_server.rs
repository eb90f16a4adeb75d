#![allow(dead_code)]
use axum::extract::{Query, RawQuery, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, StatusCode, Version};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// One request as seen by the mock endpoint.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub query: String,
    pub params: HashMap<String, String>,
    pub accept: Option<String>,
    pub content_type: Option<String>,
    pub version: Version,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Local JSON DoH endpoint with canned zones.
///
/// | name                     | reply                                      |
/// |--------------------------|--------------------------------------------|
/// | `ipv4.example.test`      | A 127.0.0.1                                |
/// | `ipv6.example.test`      | AAAA ::1                                   |
/// | `txt.example.test`       | TXT, plus an RRSIG (type 46) when `do=1`   |
/// | `slow.example.test`      | A 127.0.0.2 after 200 ms                   |
/// | `malformed.example.test` | 200 with a body that is not JSON           |
/// | `error.example.test`     | 400                                        |
/// | `nocontent.example.test` | 204                                        |
/// | no `name` parameter      | 400                                        |
/// | anything else            | NXDOMAIN (`Status: 3`)                     |
pub struct MockDohServer {
    addr: SocketAddr,
    state: MockState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDohServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = MockState::default();

        let app = Router::new()
            .route("/dns-query", get(dns_query))
            .with_state(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/dns-query", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A local address nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/dns-query", addr)
}

async fn dns_query(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
    RawQuery(raw): RawQuery,
    version: Version,
    headers: HeaderMap,
) -> Response {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        query: raw.unwrap_or_default(),
        params: params.clone(),
        accept: header(ACCEPT),
        content_type: header(CONTENT_TYPE),
        version,
    });

    let Some(name) = params.get("name").cloned() else {
        return (StatusCode::BAD_REQUEST, "missing name").into_response();
    };
    let record_type = params.get("type").cloned().unwrap_or_else(|| "A".to_string());
    let dnssec_ok = params.get("do").is_some_and(|v| v == "1");
    let checking_disabled = params.get("cd").is_some_and(|v| v == "1");

    match name.as_str() {
        "malformed.example.test" => {
            return (StatusCode::OK, "{ invalid: json }").into_response();
        }
        "error.example.test" => {
            return (StatusCode::BAD_REQUEST, "Bad Request").into_response();
        }
        "nocontent.example.test" => return StatusCode::NO_CONTENT.into_response(),
        "slow.example.test" => tokio::time::sleep(Duration::from_millis(200)).await,
        _ => {}
    }

    let type_code = type_code(&record_type);
    let answers: Vec<Value> = match (name.as_str(), type_code) {
        ("ipv4.example.test", 1) => vec![record(&name, 1, "127.0.0.1")],
        ("ipv6.example.test", 28) => vec![record(&name, 28, "::1")],
        ("slow.example.test", 1) => vec![record(&name, 1, "127.0.0.2")],
        ("txt.example.test", 16) => {
            let mut answers = vec![record(&name, 16, "\"v=mock\"")];
            if dnssec_ok {
                answers.push(record(&name, 46, "TXT 13 3 300 20301231000000 20200101000000 12345 example.test. c2lnbmF0dXJl"));
            }
            answers
        }
        _ => Vec::new(),
    };

    let known = matches!(
        name.as_str(),
        "ipv4.example.test" | "ipv6.example.test" | "txt.example.test" | "slow.example.test"
    );

    let mut body = json!({
        "Status": if known { 0 } else { 3 },
        "TC": false,
        "RD": true,
        "RA": true,
        "AD": dnssec_ok,
        "CD": checking_disabled,
        "Question": [{ "name": name, "type": type_code }],
    });
    if !answers.is_empty() {
        body["Answer"] = Value::Array(answers);
    }

    (
        StatusCode::OK,
        [(CONTENT_TYPE, "application/dns-json")],
        body.to_string(),
    )
        .into_response()
}

fn record(name: &str, type_code: u16, data: &str) -> Value {
    json!({ "name": name, "type": type_code, "TTL": 60, "data": data })
}

fn type_code(mnemonic: &str) -> u16 {
    match mnemonic {
        "A" => 1,
        "NS" => 2,
        "CNAME" => 5,
        "MX" => 15,
        "TXT" => 16,
        "AAAA" => 28,
        _ => 0,
    }
}
