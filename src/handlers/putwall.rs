use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use super::{filter_params, AppState};
use crate::{
    aggregation::putwall::{PutwallFilter, PutwallSummary},
    errors::ServiceError,
    models::{CubbyAddress, PutwallRecord},
    queries::{CubbyAddressQuery, PutwallDetailQuery, PutwallZoneSummaryQuery, Query as _},
    ApiResponse,
};

pub fn putwall_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_putwall_summary))
        .route("/data", get(get_putwall_data))
        .route("/cubbies", get(get_putwall_cubbies))
}

/// Per-zone cubby status counts
#[utoipa::path(
    get,
    path = "/api/putwall/summary",
    summary = "Putwall zone summary",
    description = "Classify every cubby into one of six status buckets and count them per zone",
    responses(
        (status = 200, description = "Zone summary", body = ApiResponse<PutwallSummary>,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 500, description = "Putwall data could not be read", body = crate::errors::ErrorResponse),
    ),
    tag = "putwall"
)]
pub async fn get_putwall_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PutwallSummary>>, ServiceError> {
    let summary = PutwallZoneSummaryQuery.execute(state.store.as_ref()).await?;
    Ok(Json(ApiResponse::success(summary)))
}

/// Raw putwall rows matching the filters
#[utoipa::path(
    get,
    path = "/api/putwall/data",
    summary = "Putwall detail rows",
    params(PutwallFilter),
    responses(
        (status = 200, description = "Matching rows", body = ApiResponse<Vec<PutwallRecord>>),
        (status = 400, description = "Undecodable query string", body = crate::errors::ErrorResponse),
        (status = 500, description = "Putwall data could not be read", body = crate::errors::ErrorResponse),
    ),
    tag = "putwall"
)]
pub async fn get_putwall_data(
    State(state): State<AppState>,
    params: Result<Query<PutwallFilter>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<PutwallRecord>>>, ServiceError> {
    let filter = filter_params(params)?;
    let rows = PutwallDetailQuery { filter }
        .execute(state.store.as_ref())
        .await?;
    Ok(Json(ApiResponse::success(rows)))
}

/// Distinct cubby codes split into zone, wall, column and number
#[utoipa::path(
    get,
    path = "/api/putwall/cubbies",
    summary = "Cubby addresses",
    responses(
        (status = 200, description = "Decomposed cubby codes", body = ApiResponse<Vec<CubbyAddress>>),
        (status = 500, description = "Putwall data could not be read", body = crate::errors::ErrorResponse),
    ),
    tag = "putwall"
)]
pub async fn get_putwall_cubbies(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CubbyAddress>>>, ServiceError> {
    let cubbies = CubbyAddressQuery.execute(state.store.as_ref()).await?;
    Ok(Json(ApiResponse::success(cubbies)))
}
