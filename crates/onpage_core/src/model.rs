use serde::{Deserialize, Serialize};

/// Status string the analysis service uses for a passing rule.
pub const RULE_STATUS_PASS: &str = "pass";

/// A validated analysis request: both fields trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    url: String,
    keyword: String,
}

impl AnalysisRequest {
    /// Trims both inputs and rejects empty ones. The URL is checked first.
    pub fn new(url: &str, keyword: &str) -> Result<Self, ValidationError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ValidationError::EmptyKeyword);
        }
        Ok(Self {
            url: url.to_owned(),
            keyword: keyword.to_owned(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid URL")]
    EmptyUrl,
    #[error("Please enter a keyword to analyze")]
    EmptyKeyword,
}

impl ValidationError {
    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyUrl => "url",
            ValidationError::EmptyKeyword => "keyword",
        }
    }
}

/// Report returned by the analysis service. Every score is server-computed
/// and carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub success: bool,
    pub url: String,
    pub keyword: String,
    pub http_status: u16,
    pub score_percentage: f64,
    pub total_score: f64,
    pub total_max_score: f64,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub label: String,
    pub score_percentage: f64,
    pub score: f64,
    pub max_score: f64,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub rule_type: String,
    pub passed: bool,
    pub score: f64,
    pub max_score: f64,
    pub status: String,
    #[serde(default)]
    pub explanation: String,
    /// Free-form payload; `None` when the service sent `null` or nothing.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl Rule {
    pub fn is_pass(&self) -> bool {
        self.status == RULE_STATUS_PASS
    }
}
