//! `tictactoe` - run the game server or drive a running one.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_engine::{Board, SessionSnapshot};
use tictactoe_server::{GameClient, ServerConfig, init_tracing};
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { host, port, config } => run_server(host, port, config).await,
        Command::State { server_url } => {
            init_tracing("warn");
            print_snapshot(&GameClient::new(server_url).state().await?);
            Ok(())
        }
        Command::Move {
            row,
            col,
            server_url,
        } => {
            init_tracing("warn");
            print_snapshot(&GameClient::new(server_url).make_move(row, col).await?);
            Ok(())
        }
        Command::Reset { server_url } => {
            init_tracing("warn");
            print_snapshot(&GameClient::new(server_url).reset().await?);
            Ok(())
        }
    }
}

/// Run the HTTP game server
#[instrument(skip_all)]
async fn run_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<std::path::PathBuf>,
) -> Result<()> {
    let mut config = ServerConfig::load(config_path.as_deref())
        .context("Failed to load server configuration")?;
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }

    init_tracing(config.log_filter());
    info!(addr = %config.bind_addr(), "Starting tic-tac-toe server");

    tictactoe_server::serve(&config).await
}

fn print_snapshot(snapshot: &SessionSnapshot) {
    println!("{}\n\n{}", Board::from(snapshot.board).display(), snapshot.status);
}
