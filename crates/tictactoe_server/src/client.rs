//! Typed HTTP client for the game API.

use crate::api::MoveRequest;
use crate::error::ErrorBody;
use tictactoe_engine::SessionSnapshot;
use tracing::{debug, info, instrument};

/// Default address of a locally running server.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Errors from talking to the game server.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ClientError {
    /// The request never produced a usable response.
    #[display("Transport error: {}", _0)]
    #[from]
    Transport(reqwest::Error),

    /// The server answered with a non-success status.
    #[display("Server rejected request ({}): {}", status, body)]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Decoded error body.
        body: ErrorBody,
    },
}

/// Client for one game server.
#[derive(Debug, Clone)]
pub struct GameClient {
    base_url: String,
    client: reqwest::Client,
}

impl GameClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the server's base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the current state.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn state(&self) -> Result<SessionSnapshot, ClientError> {
        debug!("Getting game state");
        let response = self
            .client
            .get(format!("{}/api/state", self.base_url))
            .send()
            .await?;
        Self::read_snapshot(response).await
    }

    /// Submits a move for whoever's turn it is.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn make_move(&self, row: i64, col: i64) -> Result<SessionSnapshot, ClientError> {
        info!("Making move");
        let response = self
            .client
            .post(format!("{}/api/move", self.base_url))
            .json(&MoveRequest { row, col })
            .send()
            .await?;
        Self::read_snapshot(response).await
    }

    /// Starts a new game.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn reset(&self) -> Result<SessionSnapshot, ClientError> {
        info!("Resetting game");
        let response = self
            .client
            .post(format!("{}/api/reset", self.base_url))
            .send()
            .await?;
        Self::read_snapshot(response).await
    }

    async fn read_snapshot(response: reqwest::Response) -> Result<SessionSnapshot, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await?;
        let body = serde_json::from_str::<ErrorBody>(&text)
            .unwrap_or_else(|_| ErrorBody::new("unknown".to_string(), text));
        debug!(status = %status, error = %body, "Request rejected");
        Err(ClientError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
