use bytes::Bytes;

/// Status and body of one DoH HTTP exchange, detached from the transport
/// so it can travel through pending answers and be decoded later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Bytes,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx statuses carry a usable answer; everything else does not.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
