use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::api::{HealthDto, KeepAliveDto, StatusDto, UptimeDto},
    server::state::AppState,
};

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

/// Seconds since the Unix epoch with millisecond precision.
fn unix_timestamp() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Reports that the service is running.
///
/// # Returns
/// - `200 OK` - Service status with the Discord client id
#[utoipa::path(
    get,
    path = "/status",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service is running", body = StatusDto)
    ),
)]
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusDto {
        status: "online".to_string(),
        message: "ServerSetup Bot is running!".to_string(),
        client_id: state.client_id.clone(),
        timestamp: unix_timestamp(),
    })
}

/// Endpoint for hosting platforms that idle inactive services.
#[utoipa::path(
    get,
    path = "/keep-alive",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service is alive", body = KeepAliveDto)
    ),
)]
pub async fn keep_alive() -> impl IntoResponse {
    tracing::debug!("Keep-alive pinged");

    Json(KeepAliveDto {
        status: "alive".to_string(),
        bot: "ServerSetup Bot".to_string(),
        uptime: "active".to_string(),
        timestamp: unix_timestamp(),
    })
}

/// Counts a ping from an uptime monitor.
///
/// # Returns
/// - `200 OK` - Total number of pings since startup and the bot connection state
#[utoipa::path(
    get,
    path = "/uptime",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Ping counted", body = UptimeDto)
    ),
)]
pub async fn uptime(State(state): State<AppState>) -> impl IntoResponse {
    let counter = state.metrics.record_uptime_ping();

    Json(UptimeDto {
        status: "online".to_string(),
        counter,
        bot_connected: state.metrics.bot_connected(),
        timestamp: unix_timestamp(),
        message: format!("Bot has been pinged {} times", counter),
    })
}

pub async fn ping() -> &'static str {
    "pong"
}

/// Reports process uptime in seconds.
#[utoipa::path(
    get,
    path = "/health",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthDto {
        status: "healthy".to_string(),
        uptime: state.metrics.uptime().as_secs_f64(),
    })
}
