//! Onpage core: pure state machine, report model and view-model helpers.
mod classify;
mod effect;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use classify::{classify, classify_rule, ScoreClass, StyleTokens};
pub use effect::Effect;
pub use model::{
    AnalysisReport, AnalysisRequest, Rule, Section, ValidationError, RULE_STATUS_PASS,
};
pub use msg::{FailureClass, Msg};
pub use state::{AppState, RequestId, RequestStatus};
pub use update::update;
pub use view_model::{
    format_points, AppViewModel, ReportView, RuleView, SectionView, StatusView, SummaryView,
};
