//! Tic-tac-toe session service.
//!
//! Wraps the [`tictactoe_engine`] session in a shared, lock-guarded handle
//! and exposes it over a small JSON API for the browser UI.
//!
//! # Architecture
//!
//! - **Handle**: one [`SessionHandle`] per process; every operation runs
//!   under a single lock acquisition.
//! - **API**: axum [`router`] with `state`, `move` and `reset` endpoints.
//! - **Client**: [`GameClient`] speaks the same API over HTTP.
//! - **Config**: [`ServerConfig`] from defaults, TOML and environment.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_server::{ServerConfig, serve};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::load(None)?;
//! serve(&config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod client;
mod config;
mod error;
mod handle;
mod server;
mod telemetry;

pub use api::{MoveRequest, router};
pub use client::{ClientError, DEFAULT_SERVER_URL, GameClient};
pub use config::{ConfigError, HOST_VAR, PORT_VAR, ServerConfig};
pub use error::{ApiError, ErrorBody};
pub use handle::{SessionError, SessionHandle};
pub use server::{run, serve};
pub use telemetry::init_tracing;
