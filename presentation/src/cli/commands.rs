//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for single-question mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text answer with a sources list
    Text,
    /// JSON answer (text + sources)
    Json,
    /// The conversation rendered as sanitized HTML
    Html,
}

/// CLI arguments for medchat
#[derive(Parser, Debug)]
#[command(name = "medchat")]
#[command(version, about = "Terminal chat client for the medical research agent")]
#[command(long_about = r#"
medchat sends your question to the medical research agent backend and shows
the answer with its source citations.

Ask a single question, or start an interactive conversation with --chat.

Configuration files are loaded from (in priority order):
1. MEDCHAT_* environment variables
2. --config <path>     Explicit config file
3. ./medchat.toml      Project-level config
4. ~/.config/medchat/config.toml   Global config

Example:
  medchat "Che cos'è l'ipertensione?"
  medchat --endpoint http://10.0.0.2:8080/api/ask "Quali sono i sintomi del diabete?"
  medchat --chat
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Override the agent endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Answer from canned demo data instead of a backend
    #[arg(long)]
    pub demo: bool,

    /// Output format for single-question mode
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the busy spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Skip the startup health probe
    #[arg(long)]
    pub no_health_check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_question_defaults() {
        let cli = Cli::parse_from(["medchat", "Che cos'è l'ipertensione?"]);
        assert_eq!(cli.question.as_deref(), Some("Che cos'è l'ipertensione?"));
        assert!(!cli.chat);
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from([
            "medchat",
            "--chat",
            "--demo",
            "--endpoint",
            "http://10.0.0.2:8080/api/ask",
            "-vv",
            "--output",
            "json",
        ]);
        assert!(cli.chat);
        assert!(cli.demo);
        assert_eq!(cli.endpoint.as_deref(), Some("http://10.0.0.2:8080/api/ask"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
