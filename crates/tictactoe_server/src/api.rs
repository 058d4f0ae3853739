//! JSON API consumed by the browser UI.
//!
//! | Method | Path         | Body               |
//! |--------|--------------|--------------------|
//! | GET    | `/api/state` |                    |
//! | POST   | `/api/move`  | `{"row":1,"col":2}`|
//! | POST   | `/api/reset` |                    |
//! | GET    | `/health`    |                    |
//!
//! Game endpoints answer with a [`SessionSnapshot`]; failures answer with an
//! [`ErrorBody`](crate::ErrorBody).

use crate::error::ApiError;
use crate::handle::SessionHandle;
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::Request;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use tictactoe_engine::SessionSnapshot;
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

/// Body of `POST /api/move`.
///
/// Coordinates are signed so that off-board values such as `-1` reach the
/// engine and are reported as out of range rather than as malformed input.
/// Integers too large for `i64` saturate, so they are out of range too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Row, 0 at the top.
    #[serde(deserialize_with = "coordinate")]
    pub row: i64,
    /// Column, 0 at the left.
    #[serde(deserialize_with = "coordinate")]
    pub col: i64,
}

/// Reads any JSON integer, saturating at the `i64` bounds.
///
/// Integer literals beyond `u64` are parsed by `serde_json` as floats, so an
/// integral float past the `i64` range is treated as a huge integer. Any
/// other float is not a coordinate.
fn coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    if number.is_u64() {
        return Ok(i64::MAX);
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() >= i64::MAX as f64 => {
            Ok(if value > 0.0 { i64::MAX } else { i64::MIN })
        }
        _ => Err(D::Error::custom(format!(
            "invalid coordinate {}, expected an integer",
            number
        ))),
    }
}

/// Builds the API router around a shared session.
#[instrument(skip(handle))]
pub fn router(handle: SessionHandle) -> Router {
    debug!("Building API router");
    Router::new()
        .route("/api/state", get(get_state))
        .route("/api/move", post(make_move))
        .route("/api/reset", post(reset))
        .route("/health", get(health))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(handle)
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

#[instrument(skip(handle))]
async fn get_state(
    State(handle): State<SessionHandle>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(handle.get_state()?))
}

#[instrument(skip(handle, payload))]
async fn make_move(
    State(handle): State<SessionHandle>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let Json(MoveRequest { row, col }) = payload?;
    let snapshot = handle.apply_move(row, col)?;
    info!(row, col, status = %snapshot.status, "Move accepted");
    Ok(Json(snapshot))
}

#[instrument(skip(handle))]
async fn reset(State(handle): State<SessionHandle>) -> Result<Json<SessionSnapshot>, ApiError> {
    let snapshot = handle.reset()?;
    info!("Game reset");
    Ok(Json(snapshot))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
