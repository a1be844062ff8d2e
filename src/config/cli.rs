use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::report::OutputFormat;
use crate::domain::model::StandingsKind;

#[derive(Debug, Clone, Parser)]
#[command(name = "podium-bet")]
#[command(about = "Validate and score race podium bets")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check that the podium picks name different drivers
    Validate {
        #[arg(long)]
        first: Option<String>,
        #[arg(long)]
        second: Option<String>,
        #[arg(long)]
        third: Option<String>,
        /// JSON object with submitted form fields; overrides the flags
        #[arg(long)]
        form: Option<PathBuf>,
    },
    /// Score a race tip against the official result
    ScoreRace {
        #[arg(long)]
        guess: PathBuf,
        /// Omit while the race is still pending
        #[arg(long)]
        result: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
        /// Jokers already played on other weekends
        #[arg(long, default_value_t = 0)]
        jokers_used: u32,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Score a season standings tip
    ScoreSeason {
        #[arg(long)]
        bet: Option<PathBuf>,
        #[arg(long)]
        standings: PathBuf,
        #[arg(long, value_enum)]
        kind: StandingsKind,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Show which parts of the current weekend's tip are locked
    Locks {
        /// JSON array of race weekends
        #[arg(long)]
        schedule: PathBuf,
        /// RFC 3339 timestamp, defaults to now
        #[arg(long)]
        at: Option<chrono::DateTime<chrono::Utc>>,
    },
}
