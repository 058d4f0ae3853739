//! Command-line interface for the `tictactoe` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_server::DEFAULT_SERVER_URL;

/// Tic-tac-toe session service
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Authoritative tic-tac-toe game server and client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Host to bind to (overrides config and environment)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and environment)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the current game
    State {
        /// Game server URL
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server_url: String,
    },

    /// Place the current player's mark
    Move {
        /// Row (0-2, top to bottom)
        #[arg(long, allow_negative_numbers = true)]
        row: i64,

        /// Column (0-2, left to right)
        #[arg(long, allow_negative_numbers = true)]
        col: i64,

        /// Game server URL
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server_url: String,
    },

    /// Start a new game
    Reset {
        /// Game server URL
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server_url: String,
    },
}
