//! Timed Tic-Tac-Toe - terminal entry point.

use anyhow::Result;
use clap::Parser;
use timed_tictactoe_cli::cli::{Cli, Command, OutputFormat};
use timed_tictactoe_cli::{AppConfig, parse_script, render, run_script, run_terminal};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;
    initialize_tracing(&config);

    match cli.command {
        Command::Play { size, tick_millis } => run_play(config, size, tick_millis).await,
        Command::Replay {
            size,
            script,
            format,
        } => run_replay(size, &script, format),
    }
}

/// Installs the subscriber. `RUST_LOG` wins over the config filter.
fn initialize_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive terminal game
#[instrument(skip(config))]
async fn run_play(
    config: AppConfig,
    size: Option<timed_tictactoe::BoardSize>,
    tick_millis: Option<u64>,
) -> Result<()> {
    let config = match tick_millis {
        Some(millis) => config.with_tick_millis(millis)?,
        None => config,
    };
    let config = match size {
        Some(size) => config.with_board_size(size),
        None => config,
    };

    info!(tick_millis = *config.tick_millis(), "Starting terminal game");
    run_terminal(config).await
}

/// Run a clockless replay and print the final snapshot
#[instrument]
fn run_replay(size: timed_tictactoe::BoardSize, script: &str, format: OutputFormat) -> Result<()> {
    let steps = parse_script(script)?;
    let snapshot = run_script(size, &steps);

    match format {
        OutputFormat::Text => println!("{}", render(&snapshot)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }
    Ok(())
}
