use crate::types::{LogLevel, OutputFormat, SeriesView};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "demolyzer")]
#[command(about = "Per-player lifecycle and movement statistics from match telemetry", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Config file (defaults to DEMOLYZER_CONFIG or the user config dir)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Ticks per second, enables the match duration")]
    pub tick_rate: Option<f64>,

    #[arg(long, global = true, help = "Do not read or write the extracted-table cache")]
    pub no_persist: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List players (id and first seen name)
    Players { input: PathBuf },

    /// Alive and death tick counts per player
    Deaths { input: PathBuf },

    /// Tick counts for every observed state per player
    States { input: PathBuf },

    /// Per-tick angle and movement deltas
    Angles {
        input: PathBuf,

        #[arg(long)]
        player: Option<String>,

        #[arg(long, default_value = "full")]
        series: SeriesView,
    },

    /// One-line description of the recording
    Summary { input: PathBuf },

    /// Write per-tick deltas of every player to a CSV file
    Export {
        input: PathBuf,

        #[arg(long, short)]
        output: PathBuf,
    },
}
