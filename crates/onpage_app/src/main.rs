mod cli;
mod config;
mod platform;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match platform::run_app(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_for_error(&err))
        }
    }
}

/// Configuration problems get their own code; anything else failed mid-run.
fn exit_code_for_error(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<config::ConfigError>().is_some() {
        cli::EXIT_CONFIG
    } else {
        cli::EXIT_ANALYSIS_FAILED
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn config_errors_exit_with_config_code() {
        let err = config::AppConfig::resolve(Some("not a url"), 60)
            .context("invalid configuration")
            .unwrap_err();
        assert_eq!(exit_code_for_error(&err), cli::EXIT_CONFIG);
    }

    #[test]
    fn runtime_errors_exit_with_failure_code() {
        let err = anyhow::anyhow!("analysis engine stopped unexpectedly");
        assert_eq!(exit_code_for_error(&err), cli::EXIT_ANALYSIS_FAILED);

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = anyhow::Error::new(io).context("failed to write output");
        assert_eq!(exit_code_for_error(&err), cli::EXIT_ANALYSIS_FAILED);
    }
}
