use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "curator",
    version,
    about = "Oracle-backed content judging with deterministic fallback and a bounded public gallery"
)]
pub struct Cli {
    /// Service configuration (YAML). Defaults apply when omitted.
    #[arg(long, global = true, env = "CURATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON snapshot holding the gallery and per-account caches
    #[arg(long, global = true, default_value = "curator-state.json", env = "CURATOR_STATE")]
    pub state: PathBuf,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a submission and update the gallery and caches
    Judge(JudgeArgs),
    /// Print the gallery as a JSON array, oldest first
    Gallery,
    /// Print the latest evaluation result for an account
    LastResult(AccountArgs),
    /// Print the latest diagnostic record for an account
    LastDebug(AccountArgs),
    /// Print the curator version
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct JudgeArgs {
    /// Caller account (0x + 40 hex digits)
    #[arg(long, env = "CURATOR_CALLER")]
    pub caller: String,

    /// Evaluation mode; unknown labels map to "general"
    #[arg(long, default_value = "general")]
    pub mode: String,

    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub url: String,

    /// Content text (50..=4000 chars after trimming)
    #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
    pub content: Option<String>,

    /// Read content from a file instead
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AccountArgs {
    /// Account to look up; malformed ids yield the default document
    pub account: String,
}
