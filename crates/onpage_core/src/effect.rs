use crate::{AnalysisRequest, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one analysis request to the configured endpoint.
    SubmitAnalysis {
        request_id: RequestId,
        request: AnalysisRequest,
    },
}
