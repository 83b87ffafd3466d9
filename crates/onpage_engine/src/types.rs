use std::fmt;

use onpage_core::{AnalysisReport, FailureClass, RequestId, ValidationError};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AnalysisStarted {
        request_id: RequestId,
    },
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisReport, AnalysisError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AnalysisError {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalysisError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Collapses the detailed cause into what the user gets to see.
    pub fn class(&self) -> FailureClass {
        match self.kind {
            FailureKind::Rejected => FailureClass::Application,
            FailureKind::InvalidEndpoint
            | FailureKind::HttpStatus(_)
            | FailureKind::Timeout
            | FailureKind::Network
            | FailureKind::Encode
            | FailureKind::Decode => FailureClass::Transport,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    Network,
    Encode,
    Decode,
    /// The service answered with `success: false`.
    Rejected,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Encode => write!(f, "request encoding failed"),
            FailureKind::Decode => write!(f, "unreadable response"),
            FailureKind::Rejected => write!(f, "analysis rejected"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
