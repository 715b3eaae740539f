use std::sync::Arc;

use clap::Parser;
use mavito_config::Config;
use tokio::signal;
use tokio_util::sync::CancellationToken;

pub mod cli;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod state;


use self::cli::{Cli, Command};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    let mut config = Config::new();
    if let Some(path) = cli.dataset {
        config.dataset.path = path;
    }

    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
            }
            let state = Arc::new(AppState::new(config));

            let shutdown = CancellationToken::new();
            let trigger = shutdown.clone();
            tokio::spawn(async move {
                match signal::ctrl_c().await {
                    Ok(()) => {
                        tracing::info!("Shutdown requested");
                        trigger.cancel();
                    }
                    Err(e) => tracing::error!("failed to listen for ctrl+c: {e}"),
                }
            });

            server::serve(state, shutdown).await
        }
        command => {
            let state = AppState::new(config);
            cli::run(&state, command).await
        }
    }
}
