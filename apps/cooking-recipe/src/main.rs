//! cooking-recipe
//!
//! Connects to MongoDB, lists databases and collections, and runs ingredient
//! CRUD against the `ingredients` collection. With no subcommand it runs the
//! full demo sequence.

use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use tracing::info;

mod cli;
mod commands;
mod config;
mod state;

use cli::Cli;
use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let cli = Cli::parse();

    // Load configuration from .env and environment variables
    let config = Config::from_env().wrap_err("Failed to load configuration")?;

    init_tracing(&config.environment);

    let client = database::mongodb::connect_from_config(&config.mongodb)
        .await
        .wrap_err("Failed to connect to MongoDB")?;

    info!(
        database = config.mongodb.database(),
        collection = %config.collection,
        "Connected"
    );

    let state = AppState::new(config, client.clone());
    let result = commands::run(cli.command.unwrap_or_default(), &state).await;

    // Release the connection on every exit path, then report
    drop(state);
    database::mongodb::disconnect(client).await;

    result
}
