use axum::{extract::State, routing::get, Router};
use chrono::Utc;

use super::envelope::Envelope;
use crate::models::{
    ApiInfo, HealthReport, HealthStatus, MemoryUsage, ServerInfo, ServiceReport, ServiceStatus,
};
use crate::state::AppState;
use crate::utils::process::{format_megabytes, memory_usage, timezone};
use crate::{API_NAME, API_VERSION};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/ping", get(ping))
        .route("/health", get(health))
}

/// Root endpoint
///
/// Returns basic API information.
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "API information", body = ApiInfo)
    )
)]
pub async fn root() -> Envelope<ApiInfo> {
    Envelope::ok(ApiInfo {
        name: API_NAME.to_string(),
        timestamp: Utc::now(),
        documentation: "/swagger".to_string(),
        status: "operational".to_string(),
    })
}

/// Ping endpoint
///
/// Returns server status, uptime and memory usage.
#[utoipa::path(
    get,
    path = "/ping",
    tag = "system",
    responses(
        (status = 200, description = "Server information", body = ServerInfo)
    )
)]
pub async fn ping(State(state): State<AppState>) -> Envelope<ServerInfo> {
    let (resident, virtual_mem) = memory_usage();

    Envelope::ok(ServerInfo {
        timestamp: Utc::now(),
        timezone: timezone(),
        name: API_NAME.to_string(),
        version: API_VERSION.to_string(),
        uptime: state.uptime_secs(),
        database: "connected".to_string(),
        memory: MemoryUsage {
            heap_used: format_megabytes(resident),
            heap_total: format_megabytes(virtual_mem),
        },
    })
}

/// Health check
///
/// Probes the database. A failed probe is reported in the body with
/// `success: false`; the status code stays 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Health of the API and its dependencies", body = HealthReport)
    )
)]
pub async fn health(State(state): State<AppState>) -> Envelope<HealthReport> {
    match state.wishes.ping().await {
        Ok(()) => Envelope::ok(HealthReport {
            status: HealthStatus::Healthy,
            timestamp: Utc::now(),
            services: ServiceReport {
                api: ServiceStatus::Operational,
                database: ServiceStatus::Operational,
            },
        }),
        Err(e) => {
            tracing::warn!("Database health probe failed: {}", e);
            Envelope::degraded(HealthReport {
                status: HealthStatus::Unhealthy,
                timestamp: Utc::now(),
                services: ServiceReport {
                    api: ServiceStatus::Operational,
                    database: ServiceStatus::Failed,
                },
            })
            .with_detail(e)
        }
    }
}
