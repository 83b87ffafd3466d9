use onpage_logging::{onpage_debug, onpage_info, onpage_warn};

use crate::{AnalysisRequest, AppState, Effect, Msg, RequestStatus};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(url) => {
            state.set_url(url);
            Vec::new()
        }
        Msg::KeywordChanged(keyword) => {
            state.set_keyword(keyword);
            Vec::new()
        }
        Msg::Submitted => {
            // Submit is disabled while a request is pending.
            if let Some(request_id) = state.in_flight() {
                onpage_debug!("Submit ignored, request {} still pending", request_id);
                return (state, Vec::new());
            }
            let (url, keyword) = state.inputs();
            match AnalysisRequest::new(url, keyword) {
                Ok(request) => {
                    let request_id = state.begin_request();
                    onpage_info!(
                        "Submitting request {} url={} keyword={}",
                        request_id,
                        request.url(),
                        request.keyword()
                    );
                    vec![Effect::SubmitAnalysis {
                        request_id,
                        request,
                    }]
                }
                Err(err) => {
                    onpage_debug!("Submit rejected: {} field is empty", err.field());
                    state.reject(err);
                    Vec::new()
                }
            }
        }
        Msg::AnalysisStarted { request_id } => {
            onpage_debug!("Request {} started", request_id);
            Vec::new()
        }
        Msg::AnalysisFinished { request_id, result } => {
            if state.in_flight() != Some(request_id) {
                onpage_warn!("Dropping stale result for request {}", request_id);
                return (state, Vec::new());
            }
            let status = match result {
                Ok(report) => RequestStatus::Success(report),
                Err(class) => RequestStatus::Error(class),
            };
            state.finish_request(status);
            Vec::new()
        }
    };

    (state, effects)
}
