//! Log sink setup for the onpage binary.
//!
//! Terminal output goes to stderr so stdout stays clean for reports.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::cli::LogTarget;

pub const LOG_FILE: &str = "./onpage.log";

pub fn initialize(target: LogTarget, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let loggers = build_loggers(target, level, Path::new(LOG_FILE));
    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}

fn build_loggers(
    target: LogTarget,
    level: LevelFilter,
    log_path: &Path,
) -> Vec<Box<dyn SharedLogger>> {
    let config = build_config();
    match target {
        LogTarget::Off => Vec::new(),
        LogTarget::Terminal => vec![terminal_logger(level, config)],
        LogTarget::File => create_file_logger(level, config, log_path)
            .map(|logger| vec![logger as Box<dyn SharedLogger>])
            .unwrap_or_default(),
        LogTarget::Both => {
            let mut loggers = vec![terminal_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(level, config, log_path) {
                loggers.push(file_logger);
            }
            loggers
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    log_path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_targets_select_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("onpage.log");

        assert!(build_loggers(LogTarget::Off, LevelFilter::Info, &path).is_empty());
        assert_eq!(build_loggers(LogTarget::Terminal, LevelFilter::Info, &path).len(), 1);
        assert!(!path.exists());

        assert_eq!(build_loggers(LogTarget::Both, LevelFilter::Debug, &path).len(), 2);
        assert!(path.exists());
    }

    #[test]
    fn unwritable_log_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("onpage.log");
        assert!(build_loggers(LogTarget::File, LevelFilter::Info, &path).is_empty());
    }
}
