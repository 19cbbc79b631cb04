use anyhow::Result;
use clap::Parser;

use damper_sequencer::cli::commands::{resolve_params, GenerateCommand, ShowConfigCommand, WalkCommand};
use damper_sequencer::cli::{Cli, Commands};
use damper_sequencer::config::config;
use damper_sequencer::telemetry::init_telemetry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config()?;
    init_telemetry(
        cli.json_logs || config.observability.json_logs,
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Generate { sequence, json } => {
            let params = resolve_params(&sequence, &config.defaults);
            GenerateCommand::new(params).with_json(json).execute()
        }
        Commands::Walk {
            building,
            name,
            project,
            sequence,
            skip,
            pause_at,
        } => {
            let params = resolve_params(&sequence, &config.defaults);
            WalkCommand::new(building, params)
                .with_name(name)
                .with_project(project)
                .with_skips(skip)
                .with_pause_at(pause_at)
                .with_options(config.controller_options())
                .with_metrics_log(config.observability.metrics_enabled)
                .execute()
        }
        Commands::Config => ShowConfigCommand::new(config).execute(),
    }
}
