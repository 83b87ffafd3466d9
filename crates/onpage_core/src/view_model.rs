use crate::{
    classify, classify_rule, AnalysisReport, RequestStatus, Rule, ScoreClass, Section,
    ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusView {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub url: String,
    pub keyword: String,
    pub status: StatusView,
    pub submit_enabled: bool,
    pub validation_message: Option<String>,
    pub error_message: Option<String>,
    pub report: Option<ReportView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub score_percentage: f64,
    pub class: ScoreClass,
    pub total_score: f64,
    pub total_max_score: f64,
    pub sections: Vec<SectionView>,
    pub summary: SummaryView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub id: String,
    pub label: String,
    pub score_percentage: f64,
    pub class: ScoreClass,
    pub score: f64,
    pub max_score: f64,
    pub rules: Vec<RuleView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleView {
    pub id: String,
    pub label: String,
    pub class: ScoreClass,
    pub explanation: String,
    /// Compact JSON of the rule details, absent for blank values.
    pub details: Option<String>,
    pub score: f64,
    pub max_score: f64,
}

impl RuleView {
    pub fn verdict(&self) -> &'static str {
        match self.class {
            ScoreClass::Good => "PASS",
            ScoreClass::Average | ScoreClass::Poor => "FAIL",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub url: String,
    pub keyword: String,
    pub http_status: u16,
    pub total_score: f64,
    pub total_max_score: f64,
}

impl AppViewModel {
    pub(crate) fn build(
        url: &str,
        keyword: &str,
        status: &RequestStatus,
        validation_error: Option<ValidationError>,
        dirty: bool,
    ) -> Self {
        let (status_view, error_message, report) = match status {
            RequestStatus::Idle => (StatusView::Idle, None, None),
            RequestStatus::Loading { .. } => (StatusView::Loading, None, None),
            RequestStatus::Success(report) => {
                (StatusView::Success, None, Some(ReportView::from(report)))
            }
            RequestStatus::Error(class) => (
                StatusView::Error,
                Some(class.user_message().to_string()),
                None,
            ),
        };

        Self {
            url: url.to_string(),
            keyword: keyword.to_string(),
            status: status_view,
            submit_enabled: status_view != StatusView::Loading,
            validation_message: validation_error.map(|err| err.to_string()),
            error_message,
            report,
            dirty,
        }
    }
}

impl From<&AnalysisReport> for ReportView {
    fn from(report: &AnalysisReport) -> Self {
        Self {
            score_percentage: report.score_percentage,
            class: classify(report.score_percentage),
            total_score: report.total_score,
            total_max_score: report.total_max_score,
            sections: report.sections.iter().map(SectionView::from).collect(),
            summary: SummaryView {
                url: report.url.clone(),
                keyword: report.keyword.clone(),
                http_status: report.http_status,
                total_score: report.total_score,
                total_max_score: report.total_max_score,
            },
        }
    }
}

impl From<&Section> for SectionView {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id.clone(),
            label: section.label.clone(),
            score_percentage: section.score_percentage,
            class: classify(section.score_percentage),
            score: section.score,
            max_score: section.max_score,
            rules: section.rules.iter().map(RuleView::from).collect(),
        }
    }
}

impl From<&Rule> for RuleView {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id.clone(),
            label: rule.label.clone(),
            class: classify_rule(&rule.status),
            explanation: rule.explanation.clone(),
            details: rule
                .details
                .as_ref()
                .filter(|value| !is_blank(value))
                .map(|value| value.to_string()),
            score: rule.score,
            max_score: rule.max_score,
        }
    }
}

/// `null`, `false`, zero and the empty string carry no details worth showing.
/// Empty arrays and objects are still shown.
fn is_blank(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Formats a score to at most one decimal; values that round to a whole
/// number print without a fractional part.
pub fn format_points(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::{format_points, is_blank};
    use serde_json::json;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(format_points(85.0), "85");
        assert_eq!(format_points(0.0), "0");
        assert_eq!(format_points(12.5), "12.5");
        assert_eq!(format_points(66.666), "66.7");
    }

    #[test]
    fn values_rounding_to_whole_drop_the_fraction() {
        assert_eq!(format_points(99.96), "100");
        assert_eq!(format_points(99.94), "99.9");
        assert_eq!(format_points(4.04), "4");
    }

    #[test]
    fn blank_details_match_falsy_values() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!(false)));
        assert!(is_blank(&json!(0)));
        assert!(is_blank(&json!(0.0)));
        assert!(is_blank(&json!("")));

        assert!(!is_blank(&json!(true)));
        assert!(!is_blank(&json!(3)));
        assert!(!is_blank(&json!("h1 missing")));
        assert!(!is_blank(&json!([])));
        assert!(!is_blank(&json!({})));
    }
}
