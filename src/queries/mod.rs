use async_trait::async_trait;

use crate::{errors::ServiceError, repositories::RowStore};

pub mod putwall_queries;
pub mod replenishment_queries;
pub mod unitsort_queries;

pub use putwall_queries::{CubbyAddressQuery, PutwallDetailQuery, PutwallZoneSummaryQuery};
pub use replenishment_queries::{
    LaneSummaryQuery, PrioritySummaryQuery, ReplenishmentDetailQuery,
};
pub use unitsort_queries::{
    ContainerPicksQuery, ContainerTotalsQuery, UnitSortIssuesQuery, UnitSortSummaryQuery,
};

/// A read operation: one snapshot fetch followed by pure aggregation.
#[async_trait]
pub trait Query: Send + Sync {
    type Result: Send + Sync;

    async fn execute(&self, store: &dyn RowStore) -> Result<Self::Result, ServiceError>;
}
