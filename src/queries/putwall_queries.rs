use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Query;
use crate::{
    aggregation::putwall::{self, PutwallFilter, PutwallSummary},
    errors::ServiceError,
    models::{CubbyAddress, PutwallRecord},
    repositories::RowStore,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PutwallZoneSummaryQuery;

#[async_trait]
impl Query for PutwallZoneSummaryQuery {
    type Result = PutwallSummary;

    async fn execute(&self, store: &dyn RowStore) -> Result<Self::Result, ServiceError> {
        let rows = store.putwall_rows().await?;
        Ok(putwall::summarize_by_zone(&rows))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PutwallDetailQuery {
    pub filter: PutwallFilter,
}

#[async_trait]
impl Query for PutwallDetailQuery {
    type Result = Vec<PutwallRecord>;

    async fn execute(&self, store: &dyn RowStore) -> Result<Self::Result, ServiceError> {
        let rows = store.putwall_rows().await?;
        Ok(putwall::filter_rows(&rows, &self.filter))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CubbyAddressQuery;

#[async_trait]
impl Query for CubbyAddressQuery {
    type Result = Vec<CubbyAddress>;

    async fn execute(&self, store: &dyn RowStore) -> Result<Self::Result, ServiceError> {
        let rows = store.putwall_rows().await?;
        Ok(putwall::cubby_addresses(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::putwall::tests::record;
    use crate::models::Domain;
    use crate::repositories::InMemoryRowStore;

    fn store() -> InMemoryRowStore {
        InMemoryRowStore::new().with_putwall(vec![
            record("A1", "A1", "CT1", "", "OPEN", ""),
            record("A2", "L1", "CT2", "Y", "OPEN", ""),
            record("B1", "B1", "NULL", "", "OPEN", ""),
        ])
    }

    #[tokio::test]
    async fn summary_groups_by_zone() {
        let summary = PutwallZoneSummaryQuery.execute(&store()).await.unwrap();
        assert_eq!(summary.zones.len(), 2);
        assert_eq!(summary.totals.pack_ready, 1);
        assert_eq!(summary.totals.on_conveyor, 1);
        assert_eq!(summary.totals.empty_cubby, 1);
    }

    #[tokio::test]
    async fn detail_applies_filter() {
        let query = PutwallDetailQuery {
            filter: PutwallFilter {
                cubby_status: Some("ONCONVEYOR".into()),
                ..Default::default()
            },
        };
        let rows = query.execute(&store()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cubby.as_deref(), Some("A2"));
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let store = store().failing_on(Domain::Putwall);
        let err = CubbyAddressQuery.execute(&store).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::FetchFailed {
                domain: Domain::Putwall,
                ..
            }
        ));
    }
}
