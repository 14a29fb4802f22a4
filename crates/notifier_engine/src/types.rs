use std::fmt;

pub type RequestId = u64;

/// One outbound push request: the selected recipients plus the message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushBatch {
    pub user_ids: Vec<String>,
    pub message: String,
}

/// Parsed summary of a successful collaborator response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Response entries flagged successful.
    pub success_count: usize,
    /// All response entries, successful or not.
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    DeliveryCompleted {
        request_id: RequestId,
        result: Result<DeliveryReceipt, GatewayError>,
    },
    RosterFetched {
        result: Result<Vec<String>, GatewayError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct GatewayError {
    pub kind: FailureKind,
    pub message: String,
}

impl GatewayError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    Network,
    Timeout,
    HttpStatus(u16),
    MalformedResponse,
    /// The collaborator accepted the request but reported delivery failure;
    /// the error message carries its explanation verbatim.
    Rejected,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Rejected => write!(f, "rejected by collaborator"),
        }
    }
}
