pub mod health;
pub mod putwall;
pub mod replenishment;
pub mod unitsort;

use axum::extract::{rejection::QueryRejection, Query};
use axum::{routing::get, Router};

use crate::errors::ServiceError;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Every read route, to be nested under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/putwall", putwall::putwall_routes())
        .nest("/replenishment", replenishment::replenishment_routes())
        .nest("/unitsort", unitsort::unitsort_routes())
        .route("/container", get(unitsort::get_container_picks))
        .route("/health", get(health::health_check))
        .route("/status", get(health::api_status))
}

/// Unwraps query-string filters, turning an undecodable query into a 400 with
/// the standard error body.
pub(crate) fn filter_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, ServiceError> {
    params
        .map(|Query(inner)| inner)
        .map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))
}
