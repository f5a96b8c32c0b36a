use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfo {
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub documentation: String,
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    #[schema(example = "12.5MB")]
    pub heap_used: String,
    #[schema(example = "256MB")]
    pub heap_total: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServerInfo {
    pub timestamp: DateTime<Utc>,
    #[schema(example = "Europe/Berlin")]
    pub timezone: String,
    pub name: String,
    pub version: String,
    /// Seconds since startup
    pub uptime: u64,
    pub database: String,
    pub memory: MemoryUsage,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Operational,
    Failed,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceReport {
    pub api: ServiceStatus,
    pub database: ServiceStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub services: ServiceReport,
}
