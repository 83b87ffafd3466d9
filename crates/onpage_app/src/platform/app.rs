use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use is_terminal::IsTerminal;
use onpage_core::{update, AppState, Msg, RequestStatus};
use onpage_engine::ReqwestAnalysisClient;
use onpage_logging::{onpage_debug, onpage_error, onpage_info};

use super::effects::EffectRunner;
use super::logging;
use super::ui::constants::{BANNER, BANNER_HINT, PROMPT_KEYWORD, PROMPT_URL};
use super::ui::render::{render, RenderOptions};
use crate::cli::{Cli, OutputFormat, EXIT_ANALYSIS_FAILED, EXIT_INVALID_INPUT};
use crate::config::AppConfig;

pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::initialize(cli.log, cli.verbose);

    let config = AppConfig::resolve(cli.endpoint.as_deref(), cli.timeout_secs)
        .context("invalid configuration")?;
    let client = ReqwestAnalysisClient::new(config.client_settings())
        .context("failed to build HTTP client")?;
    onpage_info!(
        "Using analysis endpoint {} (timeout {:?})",
        client.endpoint(),
        config.request_timeout
    );
    let runner = EffectRunner::new(Arc::new(client)).context("failed to start engine")?;

    let options = RenderOptions {
        color: !cli.no_color && io::stdout().is_terminal(),
        date: chrono::Local::now().format("%Y-%m-%d").to_string(),
    };
    let mut session = Session::new(runner, options, cli.format);

    if cli.is_one_shot() {
        let url = cli.url.unwrap_or_default();
        let keyword = cli.keyword.unwrap_or_default();
        session.submit_form(url, keyword)?;
        Ok(session.exit_code())
    } else {
        session.run_interactive()?;
        Ok(ExitCode::SUCCESS)
    }
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    options: RenderOptions,
    format: OutputFormat,
}

impl Session {
    fn new(runner: EffectRunner, options: RenderOptions, format: OutputFormat) -> Self {
        Self {
            state: AppState::new(),
            runner,
            options,
            format,
        }
    }

    fn run_interactive(&mut self) -> anyhow::Result<()> {
        println!("{BANNER}");
        println!("{BANNER_HINT}");

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            println!();
            let Some(url) = prompt(&mut lines, PROMPT_URL)? else {
                break;
            };
            let Some(keyword) = prompt(&mut lines, PROMPT_KEYWORD)? else {
                break;
            };
            self.submit_form(url, keyword)?;
        }
        onpage_debug!("Input closed, leaving interactive mode");
        Ok(())
    }

    /// Fills the form, submits it and waits until the request settles.
    fn submit_form(&mut self, url: String, keyword: String) -> anyhow::Result<()> {
        self.dispatch(Msg::UrlChanged(url));
        self.dispatch(Msg::KeywordChanged(keyword));
        if self.dispatch(Msg::Submitted) {
            self.render()?;
        }

        while self.state.is_loading() {
            let Some(msg) = self.runner.next_msg() else {
                onpage_error!("Engine channel closed while a request was pending");
                bail!("analysis engine stopped unexpectedly");
            };
            if self.dispatch(msg) {
                self.render()?;
            }
        }
        Ok(())
    }

    /// Applies one message, runs its effects and reports whether the view changed.
    fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        was_dirty
    }

    fn render(&self) -> anyhow::Result<()> {
        match select_output(&self.state, self.format, &self.options)? {
            Output::Stdout(text) => print!("{text}"),
            Output::Stderr(text) => eprint!("{text}"),
        }
        io::stdout().flush().context("failed to write output")?;
        Ok(())
    }

    fn exit_code(&self) -> ExitCode {
        ExitCode::from(exit_code_for(&self.state))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Output {
    Stdout(String),
    Stderr(String),
}

/// In JSON mode stdout only ever carries a fresh report; every other view goes
/// to stderr so a pipeline never sees a stale report twice.
fn select_output(
    state: &AppState,
    format: OutputFormat,
    options: &RenderOptions,
) -> anyhow::Result<Output> {
    let text = || render(&state.view(), options);
    match format {
        OutputFormat::Text => Ok(Output::Stdout(text())),
        OutputFormat::Json => match (state.validation_error(), state.report()) {
            (None, Some(report)) => {
                let mut json =
                    serde_json::to_string_pretty(report).context("failed to encode report")?;
                json.push('\n');
                Ok(Output::Stdout(json))
            }
            _ => Ok(Output::Stderr(text())),
        },
    }
}

fn exit_code_for(state: &AppState) -> u8 {
    if state.validation_error().is_some() {
        return EXIT_INVALID_INPUT;
    }
    match state.status() {
        RequestStatus::Success(_) => 0,
        RequestStatus::Idle | RequestStatus::Loading { .. } | RequestStatus::Error(_) => {
            EXIT_ANALYSIS_FAILED
        }
    }
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> anyhow::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush().context("failed to write prompt")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read input")?)),
        None => Ok(None),
    }
}
