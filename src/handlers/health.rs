use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AppState;
use crate::{errors::ServiceError, ApiResponse};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthChecks {
    pub database: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// `healthy` when every check passes
    pub status: String,
    pub checks: HealthChecks,
    pub timestamp: String,
    pub uptime_seconds: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
}

#[utoipa::path(
    get,
    path = "/api/health",
    summary = "Liveness and database check",
    responses(
        (status = 200, description = "Health report", body = ApiResponse<HealthStatus>),
    ),
    tag = "health"
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthStatus>>, ServiceError> {
    let database = match state.store.ping().await {
        Ok(()) => "healthy",
        Err(err) => {
            tracing::warn!(error = %err, "health check: store ping failed");
            "unhealthy"
        }
    };
    let now = Utc::now();

    Ok(Json(ApiResponse::success(HealthStatus {
        status: database.to_string(),
        checks: HealthChecks {
            database: database.to_string(),
        },
        timestamp: now.to_rfc3339(),
        uptime_seconds: (now - state.started_at).num_seconds(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/status",
    summary = "Build and environment info",
    responses(
        (status = 200, description = "Service status", body = ApiResponse<ServiceStatus>),
    ),
    tag = "health"
)]
pub async fn api_status(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ServiceStatus>>, ServiceError> {
    Ok(Json(ApiResponse::success(ServiceStatus {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })))
}
