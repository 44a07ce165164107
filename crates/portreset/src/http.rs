// HTTP front door
//
// One route: `GET /reset/{mac}`. Every request gets exactly one JSON
// response of shape `{success, message}` — 200 when a port was cycled,
// 400 for everything else (no match, upstream failure, bad schema).

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use portreset_core::ControllerSettings;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Uniform wire response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

/// Build the service router.
pub fn router(settings: Arc<ControllerSettings>) -> Router {
    Router::new()
        .route("/reset/{mac}", get(reset_port))
        .with_state(settings)
}

/// Handle one reset request end to end.
///
/// A fresh controller session (and cookie jar) is created inside
/// `reset` for every call, so sessions never leak across requests.
/// If the caller disconnects, dropping this future cancels the
/// in-flight controller call.
async fn reset_port(
    State(settings): State<Arc<ControllerSettings>>,
    Path(mac): Path<String>,
) -> (StatusCode, Json<ResetResponse>) {
    match portreset_core::reset(&settings, &mac).await {
        Ok(message) => {
            info!(mac, "switch port power-cycled");
            (
                StatusCode::OK,
                Json(ResetResponse {
                    success: true,
                    message,
                }),
            )
        }
        Err(err) => {
            warn!(mac, error = %err, "reset failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ResetResponse {
                    success: false,
                    message: err.to_string(),
                }),
            )
        }
    }
}
