//! Snapshot reads of the work-item tables.
//!
//! Each call returns a full, independent snapshot of one domain. A failed read
//! surfaces as [`ServiceError::FetchFailed`] and yields no partial rows.

use async_trait::async_trait;
use metrics::{counter, histogram};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Select, Statement,
};
use std::{sync::Arc, time::Instant};
use tracing::{debug, error, instrument};

use super::{BaseRepository, Repository};
use crate::entities::{pick_detail, putwall, replenishment, unitsort};
use crate::errors::ServiceError;
use crate::models::{Domain, PickDetail, PutwallRecord, ReplenishmentTask, UnitSortContainer};

/// Read-only source of row snapshots, keyed by domain.
#[async_trait]
pub trait RowStore: Send + Sync {
    async fn putwall_rows(&self) -> Result<Vec<PutwallRecord>, ServiceError>;

    async fn replenishment_rows(&self) -> Result<Vec<ReplenishmentTask>, ServiceError>;

    async fn unitsort_rows(&self) -> Result<Vec<UnitSortContainer>, ServiceError>;

    /// Pick lines of one container; an unknown id yields an empty list.
    async fn pick_details(&self, container_id: &str) -> Result<Vec<PickDetail>, ServiceError>;

    /// Liveness check of the underlying store.
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// [`RowStore`] backed by the SQL tables through sea-orm.
#[derive(Debug, Clone)]
pub struct SeaOrmRowStore {
    base: BaseRepository,
}

impl SeaOrmRowStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn snapshot<E, R>(&self, domain: Domain, query: Select<E>) -> Result<Vec<R>, ServiceError>
    where
        E: EntityTrait,
        E::Model: Sync,
        R: From<E::Model> + Send,
    {
        let start = Instant::now();
        let label = domain.to_string();
        let rows = query.all(self.base.get_db()).await.map_err(|e| {
            error!(domain = %domain, error = %e, "snapshot read failed");
            counter!("fulfillment_monitor.fetch.error", 1, "domain" => label.clone());
            ServiceError::fetch_failed(domain, e)
        })?;

        let elapsed = start.elapsed();
        histogram!("fulfillment_monitor.fetch.duration", elapsed.as_secs_f64(), "domain" => label.clone());
        counter!("fulfillment_monitor.fetch.rows", rows.len() as u64, "domain" => label);
        debug!(domain = %domain, rows = rows.len(), elapsed_ms = elapsed.as_millis() as u64, "snapshot fetched");

        Ok(rows.into_iter().map(R::from).collect())
    }
}

#[async_trait]
impl RowStore for SeaOrmRowStore {
    #[instrument(skip(self))]
    async fn putwall_rows(&self) -> Result<Vec<PutwallRecord>, ServiceError> {
        self.snapshot(
            Domain::Putwall,
            putwall::Entity::find().order_by_asc(putwall::Column::Id),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn replenishment_rows(&self) -> Result<Vec<ReplenishmentTask>, ServiceError> {
        self.snapshot(
            Domain::Replenishment,
            replenishment::Entity::find().order_by_asc(replenishment::Column::Id),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn unitsort_rows(&self) -> Result<Vec<UnitSortContainer>, ServiceError> {
        self.snapshot(
            Domain::UnitSort,
            unitsort::Entity::find().order_by_asc(unitsort::Column::Id),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn pick_details(&self, container_id: &str) -> Result<Vec<PickDetail>, ServiceError> {
        self.snapshot(
            Domain::PickDetail,
            pick_detail::Entity::find()
                .filter(pick_detail::Column::ContainerId.eq(container_id))
                .order_by_asc(pick_detail::Column::Id),
        )
        .await
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        let db = self.base.get_db();
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1".to_owned(),
        ))
        .await
        .map(|_| ())
        .map_err(|e| ServiceError::ServiceUnavailable(format!("database unreachable: {e}")))
    }
}

/// [`RowStore`] over fixed vectors. Used by tests and local tooling.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRowStore {
    pub putwall: Vec<PutwallRecord>,
    pub replenishment: Vec<ReplenishmentTask>,
    pub unitsort: Vec<UnitSortContainer>,
    pub pick_details: Vec<PickDetail>,
    failing: Option<Domain>,
}

impl InMemoryRowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_putwall(mut self, rows: Vec<PutwallRecord>) -> Self {
        self.putwall = rows;
        self
    }

    pub fn with_replenishment(mut self, rows: Vec<ReplenishmentTask>) -> Self {
        self.replenishment = rows;
        self
    }

    pub fn with_unitsort(mut self, rows: Vec<UnitSortContainer>) -> Self {
        self.unitsort = rows;
        self
    }

    pub fn with_pick_details(mut self, rows: Vec<PickDetail>) -> Self {
        self.pick_details = rows;
        self
    }

    /// Makes every read of `domain` fail as if the database had gone away.
    pub fn failing_on(mut self, domain: Domain) -> Self {
        self.failing = Some(domain);
        self
    }

    fn check(&self, domain: Domain) -> Result<(), ServiceError> {
        match self.failing {
            Some(failing) if failing == domain => Err(ServiceError::fetch_failed(
                domain,
                DbErr::Custom(format!("{domain} store unavailable")),
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl RowStore for InMemoryRowStore {
    async fn putwall_rows(&self) -> Result<Vec<PutwallRecord>, ServiceError> {
        self.check(Domain::Putwall)?;
        Ok(self.putwall.clone())
    }

    async fn replenishment_rows(&self) -> Result<Vec<ReplenishmentTask>, ServiceError> {
        self.check(Domain::Replenishment)?;
        Ok(self.replenishment.clone())
    }

    async fn unitsort_rows(&self) -> Result<Vec<UnitSortContainer>, ServiceError> {
        self.check(Domain::UnitSort)?;
        Ok(self.unitsort.clone())
    }

    async fn pick_details(&self, container_id: &str) -> Result<Vec<PickDetail>, ServiceError> {
        self.check(Domain::PickDetail)?;
        Ok(self
            .pick_details
            .iter()
            .filter(|row| row.container_id.as_deref() == Some(container_id))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failing_domain_does_not_affect_others() {
        let store = InMemoryRowStore::new().failing_on(Domain::Putwall);
        let err = store.putwall_rows().await.unwrap_err();
        assert_eq!(err.response_message(), "Failed to fetch putwall data");
        assert!(store.unitsort_rows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn pick_details_filter_by_exact_container() {
        let mut store = InMemoryRowStore::new();
        for id in ["C1", "C1", "C10"] {
            store.pick_details.push(PickDetail {
                container_id: Some(id.to_string()),
                order_number: None,
                status: None,
                item_number: None,
                pick_area: None,
            });
        }
        assert_eq!(store.pick_details("C1").await.unwrap().len(), 2);
        assert!(store.pick_details("C2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeded_rows_survive_a_failure_elsewhere() {
        let store = InMemoryRowStore::new()
            .with_replenishment(Vec::new())
            .with_pick_details(vec![PickDetail {
                container_id: Some("C1".into()),
                order_number: None,
                status: None,
                item_number: None,
                pick_area: None,
            }])
            .failing_on(Domain::Replenishment);
        assert!(store.replenishment_rows().await.is_err());
        assert_eq!(store.pick_details("C1").await.unwrap().len(), 1);
    }
}
