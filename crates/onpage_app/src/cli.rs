use clap::{Parser, ValueEnum};

use crate::config::ENDPOINT_ENV;

pub const EXIT_ANALYSIS_FAILED: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 2;
pub const EXIT_CONFIG: u8 = 3;

#[derive(Debug, Parser)]
#[command(name = "onpage")]
#[command(about = "Run an on-page SEO analysis for a URL and target keyword", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Page to analyze. Passing --url or --keyword runs a single analysis and exits.
    #[arg(long)]
    pub url: Option<String>,

    /// Target keyword for the page.
    #[arg(long)]
    pub keyword: Option<String>,

    /// Analysis service endpoint.
    #[arg(long, env = ENDPOINT_ENV)]
    pub endpoint: Option<String>,

    /// Whole-request timeout in seconds.
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, value_enum, default_value = "terminal")]
    pub log: LogTarget,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn is_one_shot(&self) -> bool {
        self.url.is_some() || self.keyword.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
    Off,
}
