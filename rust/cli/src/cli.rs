//! Command-line argument types.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "dicematch",
    version,
    about = "Multi-round dice match for local players"
)]
pub struct DicematchCli {
    /// Defaults to `play` when omitted
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one interactive match, prompting for players on stdin
    Play {
        /// Seed for turn order and dice (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Trace format written to stdout
        #[arg(long, value_enum)]
        format: Option<LogFormat>,
    },
    /// Play many matches without prompts and summarize the results
    Sim {
        /// Number of players per match, up to the configured `max_players`
        #[arg(long, default_value_t = 2)]
        players: u32,
        /// Number of matches to play
        #[arg(long, default_value_t = 100)]
        matches: u32,
        /// Base seed; match N uses seed + N
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a sample of die faces
    Rng {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// How the game trace is written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One human-readable line per event
    Text,
    /// One JSON object per event, then the match record
    Json,
}

impl LogFormat {
    /// Case-insensitive, as read from `DICEMATCH_FORMAT`.
    ///
    /// ```
    /// # use dicematch_cli::LogFormat;
    /// assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
    /// assert_eq!(LogFormat::parse("xml"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}
