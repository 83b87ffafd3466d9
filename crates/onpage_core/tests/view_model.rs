use onpage_core::{update, AnalysisReport, AppState, Msg, ScoreClass, StatusView};
use pretty_assertions::assert_eq;

fn sample_report() -> AnalysisReport {
    serde_json::from_value(serde_json::json!({
        "success": true,
        "url": "https://example.com/blog/post",
        "keyword": "rust async",
        "httpStatus": 200,
        "scorePercentage": 64,
        "totalScore": 32,
        "totalMaxScore": 50,
        "sections": [
            {
                "id": "meta",
                "label": "Meta Tags",
                "scorePercentage": 80,
                "score": 8,
                "maxScore": 10,
                "rules": [
                    {
                        "id": "title-keyword",
                        "label": "Keyword in title",
                        "type": "meta",
                        "passed": true,
                        "score": 5,
                        "maxScore": 5,
                        "status": "pass",
                        "explanation": "The title contains the keyword.",
                        "details": { "title": "Rust async in depth" }
                    },
                    {
                        "id": "description-length",
                        "label": "Description length",
                        "type": "meta",
                        "passed": false,
                        "score": 3,
                        "maxScore": 5,
                        "status": "warning",
                        "explanation": "Description is too short.",
                        "details": null
                    }
                ]
            },
            {
                "id": "content",
                "label": "Content",
                "scorePercentage": 59,
                "score": 24,
                "maxScore": 40,
                "rules": [
                    {
                        "id": "keyword-density",
                        "label": "Keyword density",
                        "type": "content",
                        "passed": false,
                        "score": 0,
                        "maxScore": 10,
                        "status": "fail",
                        "explanation": "Keyword not found in body.",
                        "details": false
                    }
                ]
            }
        ]
    }))
    .expect("valid report")
}

fn loaded_state() -> AppState {
    let (state, _) = update(AppState::new(), Msg::UrlChanged("https://example.com".into()));
    let (state, _) = update(state, Msg::KeywordChanged("rust async".into()));
    let (state, _) = update(state, Msg::Submitted);
    let (state, _) = update(
        state,
        Msg::AnalysisFinished {
            request_id: 1,
            result: Ok(sample_report()),
        },
    );
    state
}

#[test]
fn idle_view_has_no_report() {
    let view = AppState::new().view();
    assert_eq!(view.status, StatusView::Idle);
    assert!(view.submit_enabled);
    assert!(view.report.is_none());
    assert!(view.error_message.is_none());
}

#[test]
fn report_view_classifies_each_level() {
    let view = loaded_state().view();
    let report = view.report.expect("report");

    assert_eq!(report.class, ScoreClass::Average);
    assert_eq!(report.score_percentage, 64.0);
    let classes: Vec<_> = report.sections.iter().map(|s| s.class).collect();
    assert_eq!(classes, vec![ScoreClass::Good, ScoreClass::Poor]);

    let rules = &report.sections[0].rules;
    assert_eq!(rules[0].verdict(), "PASS");
    assert_eq!(rules[1].verdict(), "FAIL");
    assert_eq!(rules[1].class, ScoreClass::Poor);
}

#[test]
fn details_are_compact_json_and_null_is_hidden() {
    let view = loaded_state().view();
    let rules = &view.report.expect("report").sections[0].rules;
    assert_eq!(
        rules[0].details.as_deref(),
        Some(r#"{"title":"Rust async in depth"}"#)
    );
    assert_eq!(rules[1].details, None);
}

#[test]
fn falsy_details_are_hidden() {
    let view = loaded_state().view();
    let rule = &view.report.expect("report").sections[1].rules[0];
    assert_eq!(rule.label, "Keyword density");
    assert_eq!(rule.details, None);
}

#[test]
fn summary_mirrors_server_values() {
    let view = loaded_state().view();
    let summary = view.report.expect("report").summary;
    assert_eq!(summary.url, "https://example.com/blog/post");
    assert_eq!(summary.keyword, "rust async");
    assert_eq!(summary.http_status, 200);
    assert_eq!(summary.total_score, 32.0);
    assert_eq!(summary.total_max_score, 50.0);
}
