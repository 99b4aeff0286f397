//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for debate results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full transcript plus the verdict
    Full,
    /// Only the verdict
    Verdict,
    /// JSON output
    Json,
}

/// CLI arguments for agent-debate
#[derive(Parser, Debug)]
#[command(name = "agent-debate")]
#[command(author, version, about = "Two scripted agents debate over shared memory; a deterministic judge picks the winner")]
#[command(long_about = r#"
Agent Debate runs a fixed number of alternating rounds between two scripted
participants. Every utterance lands in a shared memory store; each speaker
gets a contextual view of it before speaking, and a line that would exactly
repeat anything already said is expanded to stay distinct. After the final
round a judge scores the transcript by keyword occurrence and names a
winner deterministically.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./debate.toml       Project-level config
3. ~/.config/agent-debate/config.toml   Global config

Example:
  agent-debate "Should AI be regulated?"
  agent-debate --rounds 4 -o verdict "Open source vs proprietary"
  agent-debate --no-diagram --no-log
"#)]
pub struct Cli {
    /// The debate topic (prompted on stdin when omitted)
    pub topic: Option<String>,

    /// Override the configured number of rounds
    #[arg(long, value_name = "N")]
    pub rounds: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Where to write the structured event log
    #[arg(long, value_name = "PATH", default_value = "debate_log.jsonl")]
    pub log_file: PathBuf,

    /// Disable the structured event log
    #[arg(long)]
    pub no_log: bool,

    /// Skip rendering the topology diagram
    #[arg(long)]
    pub no_diagram: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["agent-debate"]).unwrap();
        assert!(cli.topic.is_none());
        assert!(cli.rounds.is_none());
        assert!(matches!(cli.output, OutputFormat::Full));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_config);
        assert_eq!(cli.log_file, PathBuf::from("debate_log.jsonl"));
    }

    #[test]
    fn test_topic_is_positional() {
        let cli = Cli::try_parse_from(["agent-debate", "Should AI be regulated?"]).unwrap();
        assert_eq!(cli.topic.as_deref(), Some("Should AI be regulated?"));
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "agent-debate",
            "-vv",
            "--rounds",
            "4",
            "-o",
            "json",
            "--no-log",
            "--no-diagram",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.rounds, Some(4));
        assert!(matches!(cli.output, OutputFormat::Json));
        assert!(cli.no_log);
        assert!(cli.no_diagram);
    }

    #[test]
    fn test_invalid_output_format_is_rejected() {
        assert!(Cli::try_parse_from(["agent-debate", "-o", "yaml"]).is_err());
    }
}
