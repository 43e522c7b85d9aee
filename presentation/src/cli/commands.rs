//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for rival-challenge
///
/// Every flag is optional: with no arguments the binary runs the whole
/// challenge using configuration files and defaults.
#[derive(Parser, Debug)]
#[command(name = "rival-challenge")]
#[command(author, version, about = "Automatically completes the Rival Chatbot Challenge")]
#[command(long_about = r#"
Registers with the Rival Chatbot Challenge service, opens a conversation, and
answers every prompt until the service says thank you.

Exit status is 0 only when the challenge finishes. An unrecognized prompt, a
wrong answer, a transport error, or running past the turn limit all exit
non-zero.

Configuration files are loaded from (in priority order):
1. RIVAL_* environment variables (e.g. RIVAL_SERVICE__BASE_URL)
2. --config <path>        Explicit config file
3. ./rival-challenge.toml Project-level config
4. ~/.config/rival-challenge/config.toml   Global config

Example:
  rival-challenge
  rival-challenge --dataset data/sports-teams.dat -v
  rival-challenge --transcript run.jsonl --max-turns 50
"#)]
pub struct Cli {
    /// Team dataset file
    #[arg(short, long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Challenge service base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Name to register with
    #[arg(long)]
    pub name: Option<String>,

    /// Email to register with
    #[arg(long)]
    pub email: Option<String>,

    /// Maximum answered turns before giving up
    #[arg(long, value_name = "N")]
    pub max_turns: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Write a JSONL transcript of the conversation
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Print one plain line per turn instead of a spinner
    #[arg(long, conflicts_with = "quiet")]
    pub plain: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective config, then exit
    #[arg(long)]
    pub show_config: bool,
}
