use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Cannot resolve an empty name")]
    InvalidName,

    #[error("Malformed DoH response: {0}")]
    MalformedResponse(String),

    #[error("Upstream {url} returned HTTP {status}")]
    UpstreamError { url: String, status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("DNS socket [{0}] is not defined")]
    UnknownSocket(String),

    #[error("Driver [{0}] is not supported")]
    UnsupportedDriver(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid DoH endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Pending query task failed: {0}")]
    TaskFailed(String),
}
