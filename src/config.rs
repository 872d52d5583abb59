//! Command-line configuration.

use clap::Parser;

/// Document downloaded by the Download option unless overridden.
pub const DEFAULT_SOURCE_URL: &str = "http://mvi.mechatronika.cool/sites/default/files/berces.html";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "web-records",
    about = "Download a text document, split it into records, and browse them from a menu",
    version
)]
pub struct Config {
    /// Address of the text document to download
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// Output format for the record listing
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Config {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}
