use std::fmt::Write;

use onpage_core::{
    format_points, AppViewModel, ReportView, RuleView, ScoreClass, SectionView, StatusView,
    SummaryView,
};
use owo_colors::OwoColorize;

use super::constants::{LOADING, URL_DISPLAY_LIMIT};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub color: bool,
    /// Shown on the score card, `YYYY-MM-DD`.
    pub date: String,
}

pub fn render(view: &AppViewModel, options: &RenderOptions) -> String {
    let mut out = String::new();

    if let Some(message) = &view.validation_message {
        let line = format!("! {message}");
        let _ = writeln!(out, "{}", paint_class(&line, ScoreClass::Poor, options));
    }

    match view.status {
        StatusView::Idle => {}
        StatusView::Loading => {
            let _ = writeln!(out, "{LOADING}");
        }
        StatusView::Error => {
            if let Some(message) = &view.error_message {
                let _ = writeln!(out, "{}", paint_class(message, ScoreClass::Poor, options));
            }
        }
        StatusView::Success => {
            if let Some(report) = &view.report {
                render_report(&mut out, report, options);
            }
        }
    }

    out
}

fn render_report(out: &mut String, report: &ReportView, options: &RenderOptions) {
    render_score_card(out, report, options);
    for section in &report.sections {
        let _ = writeln!(out);
        render_section(out, section, options);
    }
    let _ = writeln!(out);
    render_summary(out, &report.summary);
}

fn render_score_card(out: &mut String, report: &ReportView, options: &RenderOptions) {
    let _ = writeln!(
        out,
        "Your score is {}",
        paint_class(report.class.label(), report.class, options)
    );
    let _ = writeln!(
        out,
        "SEO Score: {}/100",
        paint_class(&format_points(report.score_percentage), report.class, options)
    );
    let _ = writeln!(
        out,
        "Total Score: {}/{}",
        format_points(report.total_score),
        format_points(report.total_max_score)
    );
    let _ = writeln!(
        out,
        "Date: {} | Keyword: {} | URL: {}",
        options.date,
        report.summary.keyword,
        truncate_url(&report.summary.url)
    );
}

fn render_section(out: &mut String, section: &SectionView, options: &RenderOptions) {
    let _ = writeln!(
        out,
        "{}  {}  ({}/{} points)",
        bold(&section.label, options),
        paint_class(
            &format!("{}%", format_points(section.score_percentage)),
            section.class,
            options
        ),
        format_points(section.score),
        format_points(section.max_score)
    );
    for rule in &section.rules {
        render_rule(out, rule, options);
    }
}

fn render_rule(out: &mut String, rule: &RuleView, options: &RenderOptions) {
    let _ = writeln!(
        out,
        "  [{}] {} ({}/{} points)",
        paint_class(rule.verdict(), rule.class, options),
        rule.label,
        format_points(rule.score),
        format_points(rule.max_score)
    );
    if !rule.explanation.is_empty() {
        let _ = writeln!(out, "         {}", rule.explanation);
    }
    if let Some(details) = &rule.details {
        let _ = writeln!(out, "         Details: {details}");
    }
}

fn render_summary(out: &mut String, summary: &SummaryView) {
    let _ = writeln!(out, "Analysis Summary");
    let _ = writeln!(out, "  Analyzed URL:   {}", summary.url);
    let _ = writeln!(out, "  Target Keyword: {}", summary.keyword);
    let _ = writeln!(out, "  HTTP Status:    {}", summary.http_status);
    let _ = writeln!(
        out,
        "  Total Score:    {}/{}",
        format_points(summary.total_score),
        format_points(summary.total_max_score)
    );
}

fn truncate_url(url: &str) -> String {
    if url.chars().count() > URL_DISPLAY_LIMIT {
        let head: String = url.chars().take(URL_DISPLAY_LIMIT).collect();
        format!("{head}...")
    } else {
        url.to_string()
    }
}

fn paint_class(text: &str, class: ScoreClass, options: &RenderOptions) -> String {
    if options.color {
        let (r, g, b) = class.tokens().rgb;
        text.truecolor(r, g, b).bold().to_string()
    } else {
        text.to_string()
    }
}

fn bold(text: &str, options: &RenderOptions) -> String {
    if options.color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
