use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "YouTube niche analytics and opportunity scoring")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Rank videos by opportunity score
    Score {
        /// JSON array of videos, or `-` for stdin
        #[arg(short, long)]
        input: PathBuf,
        /// Weight profile (defaults to the configured weights)
        #[arg(short, long)]
        profile: Option<String>,
        /// Reference time, RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run descriptive analyses over a video sample
    Analyze {
        /// JSON array of videos, or `-` for stdin
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = AnalysisKind::All)]
        kind: AnalysisKind,
        /// Reference time, RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List weight profiles and show the active one
    Profiles {
        /// Switch the active weights to this profile
        #[arg(short, long)]
        apply: Option<String>,
        /// Persist the resulting configuration to `.env`
        #[arg(short, long)]
        save: bool,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Growth,
    Titles,
    Competitors,
    Temporal,
    Keywords,
    Report,
    All,
}
