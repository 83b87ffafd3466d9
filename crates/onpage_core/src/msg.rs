use crate::{AnalysisReport, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL field.
    UrlChanged(String),
    /// User edited the keyword field.
    KeywordChanged(String),
    /// User submitted the form.
    Submitted,
    /// Engine started working on a request.
    AnalysisStarted { request_id: RequestId },
    /// Engine finished a request, successfully or not.
    AnalysisFinished {
        request_id: RequestId,
        result: Result<AnalysisReport, FailureClass>,
    },
}

/// How a failed analysis is presented. The user sees one retry message per
/// class; the detailed cause stays in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Non-2xx status, timeout, connection failure or unreadable body.
    Transport,
    /// The service answered with `success: false`.
    Application,
}

impl FailureClass {
    pub fn user_message(self) -> &'static str {
        match self {
            FailureClass::Transport => {
                "Failed to analyze website. Please check your connection and try again."
            }
            FailureClass::Application => "Failed to analyze website. Please try again.",
        }
    }
}
