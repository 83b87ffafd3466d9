use crate::view_model::AppViewModel;
use crate::{AnalysisReport, FailureClass, ValidationError};

pub type RequestId = u64;

/// Lifecycle of the single request slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Success(AnalysisReport),
    Error(FailureClass),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    url: String,
    keyword: String,
    status: RequestStatus,
    validation_error: Option<ValidationError>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(
            &self.url,
            &self.keyword,
            &self.status,
            self.validation_error,
            self.dirty,
        )
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.status {
            RequestStatus::Success(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, RequestStatus::Loading { .. })
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn inputs(&self) -> (&str, &str) {
        (&self.url, &self.keyword)
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.url != url {
            self.url = url;
            self.validation_error = None;
            self.dirty = true;
        }
    }

    pub(crate) fn set_keyword(&mut self, keyword: String) {
        if self.keyword != keyword {
            self.keyword = keyword;
            self.validation_error = None;
            self.dirty = true;
        }
    }

    pub(crate) fn reject(&mut self, error: ValidationError) {
        self.validation_error = Some(error);
        self.dirty = true;
    }

    /// Moves to `Loading` under a fresh id, dropping any previous report or error.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.validation_error = None;
        self.status = RequestStatus::Loading {
            request_id: self.last_request_id,
        };
        self.dirty = true;
        self.last_request_id
    }

    pub(crate) fn in_flight(&self) -> Option<RequestId> {
        match self.status {
            RequestStatus::Loading { request_id } => Some(request_id),
            _ => None,
        }
    }

    pub(crate) fn finish_request(&mut self, status: RequestStatus) {
        self.status = status;
        self.dirty = true;
    }
}
