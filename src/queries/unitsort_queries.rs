use async_trait::async_trait;

use super::Query;
use crate::{
    aggregation::{
        filters::active,
        unitsort::{
            self, ContainerFilter, ContainerTotals, IssueFilter, IssueReport, UnitSortSummary,
        },
    },
    config::AlertThresholds,
    errors::ServiceError,
    models::PickDetail,
    repositories::RowStore,
};

#[derive(Debug, Clone, Default)]
pub struct UnitSortSummaryQuery {
    pub thresholds: AlertThresholds,
}

#[async_trait]
impl Query for UnitSortSummaryQuery {
    type Result = UnitSortSummary;

    async fn execute(&self, store: &dyn RowStore) -> Result<Self::Result, ServiceError> {
        let containers = store.unitsort_rows().await?;
        Ok(unitsort::summarize(&containers, &self.thresholds))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContainerTotalsQuery {
    pub filter: ContainerFilter,
}

#[async_trait]
impl Query for ContainerTotalsQuery {
    type Result = Vec<ContainerTotals>;

    async fn execute(&self, store: &dyn RowStore) -> Result<Self::Result, ServiceError> {
        let containers = store.unitsort_rows().await?;
        Ok(unitsort::container_totals(&containers, &self.filter))
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnitSortIssuesQuery {
    pub filter: IssueFilter,
}

#[async_trait]
impl Query for UnitSortIssuesQuery {
    type Result = IssueReport;

    async fn execute(&self, store: &dyn RowStore) -> Result<Self::Result, ServiceError> {
        let containers = store.unitsort_rows().await?;
        Ok(unitsort::find_issues(&containers, &self.filter))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContainerPicksQuery {
    pub container_id: Option<String>,
}

#[async_trait]
impl Query for ContainerPicksQuery {
    type Result = Vec<PickDetail>;

    async fn execute(&self, store: &dyn RowStore) -> Result<Self::Result, ServiceError> {
        match active(self.container_id.as_deref()) {
            Some(container_id) => store.pick_details(container_id).await,
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::unitsort::tests::container;
    use crate::models::Domain;
    use crate::repositories::InMemoryRowStore;

    fn store() -> InMemoryRowStore {
        InMemoryRowStore::new()
            .with_unitsort(vec![
                container("C1", "P1", 3, 2),
                container("C2", "P1", 0, 5),
                container("C3", "P2", 4, 1),
            ])
            .with_pick_details(vec![PickDetail {
                container_id: Some("C1".into()),
                order_number: Some("ORD-1".into()),
                status: Some("PICKED".into()),
                item_number: Some("SKU-1".into()),
                pick_area: Some("A".into()),
            }])
    }

    #[tokio::test]
    async fn issues_query_reports_averages() {
        let report = UnitSortIssuesQuery::default()
            .execute(&store())
            .await
            .unwrap();
        assert_eq!(report.count, 2);
        assert_eq!(report.average_unallocated, 4);
        assert_eq!(report.average_replen, 2);
    }

    #[tokio::test]
    async fn blank_container_id_skips_the_store() {
        let store = store().failing_on(Domain::PickDetail);
        let rows = ContainerPicksQuery {
            container_id: Some("  ".into()),
        }
        .execute(&store)
        .await
        .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn container_picks_by_id() {
        let rows = ContainerPicksQuery {
            container_id: Some("C1".into()),
        }
        .execute(&store())
        .await
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].order_number.as_deref(), Some("ORD-1"));
    }

    #[tokio::test]
    async fn summary_failure_names_unitsort() {
        let store = store().failing_on(Domain::UnitSort);
        let err = UnitSortSummaryQuery::default()
            .execute(&store)
            .await
            .unwrap_err();
        assert_eq!(err.response_message(), "Failed to fetch unitsort data");
    }
}
