use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::{filter_params, AppState};
use crate::{
    aggregation::unitsort::{
        ContainerFilter, ContainerTotals, IssueFilter, IssueReport, UnitSortSummary,
    },
    errors::ServiceError,
    models::PickDetail,
    queries::{
        ContainerPicksQuery, ContainerTotalsQuery, Query as _, UnitSortIssuesQuery,
        UnitSortSummaryQuery,
    },
    ApiResponse,
};

pub fn unitsort_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_unitsort_summary))
        .route("/data", get(get_unitsort_data))
        .route("/issues", get(get_unitsort_issues))
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContainerParams {
    /// Container to list pick lines for
    #[serde(alias = "containerId")]
    pub container_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/unitsort/summary",
    summary = "Unit-sort totals and alert indicators",
    responses(
        (status = 200, description = "Totals with derived alert flags", body = ApiResponse<UnitSortSummary>),
        (status = 500, description = "Unit-sort data could not be read", body = crate::errors::ErrorResponse),
    ),
    tag = "unitsort"
)]
pub async fn get_unitsort_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UnitSortSummary>>, ServiceError> {
    let summary = UnitSortSummaryQuery {
        thresholds: state.config.alerts.clone(),
    }
    .execute(state.store.as_ref())
    .await?;
    Ok(Json(ApiResponse::success(summary)))
}

#[utoipa::path(
    get,
    path = "/api/unitsort/data",
    summary = "Per-container unit totals",
    params(ContainerFilter),
    responses(
        (status = 200, description = "Container totals", body = ApiResponse<Vec<ContainerTotals>>),
        (status = 400, description = "Undecodable query string", body = crate::errors::ErrorResponse),
        (status = 500, description = "Unit-sort data could not be read", body = crate::errors::ErrorResponse),
    ),
    tag = "unitsort"
)]
pub async fn get_unitsort_data(
    State(state): State<AppState>,
    params: Result<Query<ContainerFilter>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<ContainerTotals>>>, ServiceError> {
    let filter = filter_params(params)?;
    let rows = ContainerTotalsQuery { filter }
        .execute(state.store.as_ref())
        .await?;
    Ok(Json(ApiResponse::success(rows)))
}

#[utoipa::path(
    get,
    path = "/api/unitsort/issues",
    summary = "Containers with unallocated picks waiting on replenishment",
    params(IssueFilter),
    responses(
        (status = 200, description = "Issue containers with averages", body = ApiResponse<IssueReport>),
        (status = 400, description = "Undecodable query string", body = crate::errors::ErrorResponse),
        (status = 500, description = "Unit-sort data could not be read", body = crate::errors::ErrorResponse),
    ),
    tag = "unitsort"
)]
pub async fn get_unitsort_issues(
    State(state): State<AppState>,
    params: Result<Query<IssueFilter>, QueryRejection>,
) -> Result<Json<ApiResponse<IssueReport>>, ServiceError> {
    let filter = filter_params(params)?;
    let report = UnitSortIssuesQuery { filter }
        .execute(state.store.as_ref())
        .await?;
    Ok(Json(ApiResponse::success(report)))
}

#[utoipa::path(
    get,
    path = "/api/container",
    summary = "Pick lines of one container",
    description = "A missing or unknown container id yields an empty list",
    params(ContainerParams),
    responses(
        (status = 200, description = "Pick lines", body = ApiResponse<Vec<PickDetail>>),
        (status = 500, description = "Pick detail could not be read", body = crate::errors::ErrorResponse),
    ),
    tag = "unitsort"
)]
pub async fn get_container_picks(
    State(state): State<AppState>,
    params: Result<Query<ContainerParams>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<PickDetail>>>, ServiceError> {
    let ContainerParams { container_id } = filter_params(params)?;
    let rows = ContainerPicksQuery { container_id }
        .execute(state.store.as_ref())
        .await?;
    Ok(Json(ApiResponse::success(rows)))
}
