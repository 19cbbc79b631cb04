use clap::{Args, Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "damper-seq")]
#[command(about = "Floor-by-floor damper inspection sequencing")]
#[command(long_about = "Generates the ordered damper inspection checklist for a building and walks \
                       it one item at a time. Start with 'damper-seq generate' to preview a checklist.")]
pub struct Cli {
    /// Emit JSON log lines
    #[arg(long, global = true, help = "Emit structured JSON logs on stderr")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Generator parameters; unset values fall back to the configured defaults
#[derive(Args, Debug, Clone, Default)]
pub struct SequenceArgs {
    /// First floor of the run
    #[arg(long, allow_hyphen_values = true, help = "First floor number (negative for basements)")]
    pub start_floor: Option<i32>,
    /// Number of floors to inspect
    #[arg(long, help = "Number of floors, at least 1")]
    pub floors: Option<u32>,
    /// Dampers on each floor
    #[arg(long, help = "Dampers per floor, at least 1")]
    pub dampers: Option<u32>,
    /// Inspection point label
    #[arg(long, help = "Location label for every item, e.g. 'Smoke Shaft'")]
    pub location: Option<String>,
    /// Shaft id prefix
    #[arg(long, help = "Shaft id prefix; suffixed -1, -2, ... when a floor has several dampers")]
    pub shaft_prefix: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the inspection checklist for a floor range
    Generate {
        #[command(flatten)]
        sequence: SequenceArgs,
        /// Print JSON instead of a table
        #[arg(long, help = "Print the checklist as JSON")]
        json: bool,
    },
    /// Create a session and walk it to completion with synthetic test ids
    Walk {
        /// Building being inspected
        #[arg(long, help = "Building name (required)")]
        building: String,
        /// Session name
        #[arg(long, help = "Session name (defaults to '<building> - <date>')")]
        name: Option<String>,
        /// External project reference
        #[arg(long, help = "Project id the session belongs to")]
        project: Option<String>,
        #[command(flatten)]
        sequence: SequenceArgs,
        /// Item indices to skip
        #[arg(long = "skip", help = "0-based item index to skip (repeatable)")]
        skip: Vec<usize>,
        /// Pause and resume when reaching this index
        #[arg(long, help = "Pause and resume the session when this item becomes current")]
        pause_at: Option<usize>,
    },
    /// Print the effective configuration as TOML
    Config,
}
