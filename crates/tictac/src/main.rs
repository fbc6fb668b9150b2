//! Tic Tac Toe - two players, one mouse.

use std::process::ExitCode;
use tictac::{GameConfig, StartupError};
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, code = err.exit_code(), "Startup failed");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

#[instrument]
fn run() -> Result<(), StartupError> {
    let config = GameConfig::default();
    info!(paths = ?config.piece_paths(), "Loading piece images");

    let pieces = tictac::load_pieces_blocking(config.piece_paths())?;
    tictac::run(config, pieces)
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tictac=debug,tictac_game=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
