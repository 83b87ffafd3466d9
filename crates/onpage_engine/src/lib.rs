//! Onpage engine: HTTP client for the analysis service and effect execution.
mod client;
mod engine;
mod types;

pub use client::{
    decode_report, submit, AnalysisClient, ClientSettings, ReqwestAnalysisClient,
    DEFAULT_ENDPOINT,
};
pub use engine::EngineHandle;
pub use types::{AnalysisError, EngineEvent, FailureKind, SubmitError};
