use async_trait::async_trait;

use super::Query;
use crate::{
    aggregation::replenishment::{
        self, LaneSummary, PriorityBucketCount, ReplenishmentDetail, ReplenishmentFilter,
    },
    errors::ServiceError,
    repositories::RowStore,
};

#[derive(Debug, Clone, Default)]
pub struct PrioritySummaryQuery;

#[async_trait]
impl Query for PrioritySummaryQuery {
    type Result = Vec<PriorityBucketCount>;

    async fn execute(&self, store: &dyn RowStore) -> Result<Self::Result, ServiceError> {
        let tasks = store.replenishment_rows().await?;
        Ok(replenishment::summarize_by_priority(&tasks))
    }
}

#[derive(Debug, Clone)]
pub struct LaneSummaryQuery {
    /// Percent share above which one lane is flagged.
    pub concentration_threshold: u32,
}

#[async_trait]
impl Query for LaneSummaryQuery {
    type Result = LaneSummary;

    async fn execute(&self, store: &dyn RowStore) -> Result<Self::Result, ServiceError> {
        let tasks = store.replenishment_rows().await?;
        Ok(replenishment::summarize_lanes(
            &tasks,
            self.concentration_threshold,
        ))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReplenishmentDetailQuery {
    pub filter: ReplenishmentFilter,
}

#[async_trait]
impl Query for ReplenishmentDetailQuery {
    type Result = Vec<ReplenishmentDetail>;

    async fn execute(&self, store: &dyn RowStore) -> Result<Self::Result, ServiceError> {
        let tasks = store.replenishment_rows().await?;
        Ok(replenishment::group_details(&tasks, &self.filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::replenishment::{tests::task, PriorityBucket};
    use crate::models::Domain;
    use crate::repositories::InMemoryRowStore;

    fn store() -> InMemoryRowStore {
        InMemoryRowStore::new().with_replenishment(vec![
            task("L1", Some("45"), 10, "A1-01"),
            task("L1", None, 5, "A1-02"),
            task("L2", Some("100"), 5, "B2-01"),
        ])
    }

    #[tokio::test]
    async fn priority_summary_buckets_each_task_once() {
        let rows = PrioritySummaryQuery.execute(&store()).await.unwrap();
        let total: u64 = rows.iter().map(|row| row.count).sum();
        assert_eq!(total, 3);
        assert_eq!(rows[2].priority_range, PriorityBucket::Range90);
    }

    #[tokio::test]
    async fn lane_summary_uses_threshold() {
        let summary = LaneSummaryQuery {
            concentration_threshold: 80,
        }
        .execute(&store())
        .await
        .unwrap();
        assert_eq!(summary.highest_lane.as_deref(), Some("L1"));
        assert_eq!(summary.highest_lane_percent, 75);
        assert!(!summary.high_concentration);
    }

    #[tokio::test]
    async fn detail_filters_by_zone() {
        let rows = ReplenishmentDetailQuery {
            filter: ReplenishmentFilter {
                zone: Some("B2".into()),
                ..Default::default()
            },
        }
        .execute(&store())
        .await
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pack_lane.as_deref(), Some("L2"));
    }

    #[tokio::test]
    async fn fetch_failure_names_domain() {
        let store = store().failing_on(Domain::Replenishment);
        let err = PrioritySummaryQuery.execute(&store).await.unwrap_err();
        assert_eq!(err.response_message(), "Failed to fetch replenishment data");
    }
}
