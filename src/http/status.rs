//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

/// Path of the liveness endpoint.
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}
