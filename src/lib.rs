//! Fulfillment Monitor Library
//!
//! Read-only operational views over putwall, replenishment and unit-sort work
//! queues. Rows are fetched as snapshots through [`repositories::RowStore`] and
//! summarised by the pure functions in [`aggregation`].
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod aggregation;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod queries;
pub mod repositories;
pub mod seed;
pub mod telemetry;

use axum::{middleware, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::repositories::RowStore;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RowStore>,
    pub config: config::AppConfig,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Arc<dyn RowStore>, config: config::AppConfig) -> Self {
        Self {
            store,
            config,
            started_at: Utc::now(),
        }
    }
}

// Common response wrappers
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Serialize, ToSchema)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            request_id: crate::telemetry::current_request_id().map(|rid| rid.as_str().to_string()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            meta: Some(ResponseMeta::capture()),
        }
    }
}


/// The `/api` routes plus Swagger UI, with request ids and HTTP tracing.
/// Transport concerns such as CORS, timeouts and compression are layered on
/// by the binary.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", handlers::api_routes())
        .merge(openapi::swagger_ui())
        .with_state(state)
        .layer(telemetry::configure_http_tracing())
        .layer(middleware::from_fn(middleware_helpers::request_id_middleware))
}
