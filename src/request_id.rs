use uuid::Uuid;

/// Header carrying the correlation ID of an outgoing backend call
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation ID attached to one backend call, logged alongside its failures
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
