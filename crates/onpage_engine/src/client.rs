use std::time::Duration;

use onpage_core::{AnalysisReport, AnalysisRequest};
use onpage_logging::{onpage_debug, onpage_trace, onpage_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use serde_json::Value;

use crate::{AnalysisError, FailureKind, SubmitError};

/// Local development address of the analysis service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/analyze";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientSettings {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Sends one request. No retries.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestAnalysisClient {
    pub fn new(settings: ClientSettings) -> Result<Self, AnalysisError> {
        if !matches!(settings.endpoint.scheme(), "http" | "https") {
            return Err(AnalysisError::new(
                FailureKind::InvalidEndpoint,
                format!("unsupported scheme {}", settings.endpoint.scheme()),
            ));
        }
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| AnalysisError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.settings.endpoint
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ReqwestAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        let body = serde_json::to_vec(request)
            .map_err(|err| AnalysisError::new(FailureKind::Encode, err.to_string()))?;

        onpage_debug!("POST {} ({} bytes)", self.settings.endpoint, body.len());
        let response = self
            .client
            .post(self.settings.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        onpage_trace!("{} answered {} with {} bytes", self.settings.endpoint, status, bytes.len());
        decode_report(&bytes)
    }
}

/// Checks the `success` flag before decoding the full report, so a rejection
/// body that lacks the report fields is still classified as a rejection.
pub fn decode_report(body: &[u8]) -> Result<AnalysisReport, AnalysisError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| AnalysisError::new(FailureKind::Decode, err.to_string()))?;

    if value.get("success").and_then(Value::as_bool) != Some(true) {
        let reason = ["error", "message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .unwrap_or("service reported success: false");
        return Err(AnalysisError::new(FailureKind::Rejected, reason));
    }

    serde_json::from_value(value)
        .map_err(|err| AnalysisError::new(FailureKind::Decode, err.to_string()))
}

/// Validates the raw inputs, then performs exactly one analysis call.
pub async fn submit(
    client: &dyn AnalysisClient,
    url: &str,
    keyword: &str,
) -> Result<AnalysisReport, SubmitError> {
    let request = AnalysisRequest::new(url, keyword)?;
    match client.analyze(&request).await {
        Ok(report) => Ok(report),
        Err(err) => {
            onpage_warn!(
                "Analysis of {} failed ({:?}): {}",
                request.url(),
                err.kind,
                err.message
            );
            Err(err.into())
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AnalysisError {
    if err.is_timeout() {
        return AnalysisError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() || err.is_body() {
        return AnalysisError::new(FailureKind::Decode, err.to_string());
    }
    AnalysisError::new(FailureKind::Network, err.to_string())
}
