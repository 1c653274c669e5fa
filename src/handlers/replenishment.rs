use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use super::{filter_params, AppState};
use crate::{
    aggregation::replenishment::{
        LaneSummary, PriorityBucketCount, ReplenishmentDetail, ReplenishmentFilter,
    },
    errors::ServiceError,
    queries::{LaneSummaryQuery, PrioritySummaryQuery, Query as _, ReplenishmentDetailQuery},
    ApiResponse,
};

pub fn replenishment_routes() -> Router<AppState> {
    Router::new()
        .route("/summaryByPriority", get(get_priority_summary))
        .route("/summary", get(get_lane_summary))
        .route("/data", get(get_replenishment_data))
}

#[utoipa::path(
    get,
    path = "/api/replenishment/summaryByPriority",
    summary = "Task counts per pack lane and priority range",
    responses(
        (status = 200, description = "Bucketed counts", body = ApiResponse<Vec<PriorityBucketCount>>),
        (status = 500, description = "Replenishment data could not be read", body = crate::errors::ErrorResponse),
    ),
    tag = "replenishment"
)]
pub async fn get_priority_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PriorityBucketCount>>>, ServiceError> {
    let rows = PrioritySummaryQuery.execute(state.store.as_ref()).await?;
    Ok(Json(ApiResponse::success(rows)))
}

#[utoipa::path(
    get,
    path = "/api/replenishment/summary",
    summary = "Replen units per pack lane",
    description = "Includes the busiest lane and whether its share crosses the concentration threshold",
    responses(
        (status = 200, description = "Lane summary", body = ApiResponse<LaneSummary>),
        (status = 500, description = "Replenishment data could not be read", body = crate::errors::ErrorResponse),
    ),
    tag = "replenishment"
)]
pub async fn get_lane_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<LaneSummary>>, ServiceError> {
    let summary = LaneSummaryQuery {
        concentration_threshold: state.config.alerts.lane_concentration_percent,
    }
    .execute(state.store.as_ref())
    .await?;
    Ok(Json(ApiResponse::success(summary)))
}

#[utoipa::path(
    get,
    path = "/api/replenishment/data",
    summary = "Grouped replenishment detail",
    params(ReplenishmentFilter),
    responses(
        (status = 200, description = "Grouped rows with summed quantities", body = ApiResponse<Vec<ReplenishmentDetail>>),
        (status = 400, description = "Undecodable query string", body = crate::errors::ErrorResponse),
        (status = 500, description = "Replenishment data could not be read", body = crate::errors::ErrorResponse),
    ),
    tag = "replenishment"
)]
pub async fn get_replenishment_data(
    State(state): State<AppState>,
    params: Result<Query<ReplenishmentFilter>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<ReplenishmentDetail>>>, ServiceError> {
    let filter = filter_params(params)?;
    let rows = ReplenishmentDetailQuery { filter }
        .execute(state.store.as_ref())
        .await?;
    Ok(Json(ApiResponse::success(rows)))
}
