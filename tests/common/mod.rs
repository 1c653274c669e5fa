#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use fulfillment_monitor::{
    app_router,
    config::AppConfig,
    db,
    entities::{pick_detail, putwall, replenishment, unitsort},
    repositories::SeaOrmRowStore,
    seed, AppState,
};

/// Router over a fresh SQLite file with the monitor schema applied.
pub struct TestApp {
    router: Router,
    pub db: Arc<DatabaseConnection>,
    pub state: AppState,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("monitor_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", path.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let db = Arc::new(pool);
        let store = Arc::new(SeaOrmRowStore::new(db.clone()));
        let state = AppState::new(store, cfg);
        let router = app_router(state.clone());

        Self {
            router,
            db,
            state,
            _dir: dir,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, headers: &[(&str, &str)]) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Method::GET, uri, &[]).await
    }

    /// GET returning the status and the decoded JSON body.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let response = self.get(uri).await;
        let status = response.status();
        (status, json_body(response).await)
    }

    pub async fn seed_putwall(&self, rows: Vec<putwall::Model>) {
        seed::insert_putwall(&self.db, rows)
            .await
            .expect("seed putwall rows");
    }

    pub async fn seed_replenishment(&self, rows: Vec<replenishment::Model>) {
        seed::insert_replenishment(&self.db, rows)
            .await
            .expect("seed replenishment rows");
    }

    pub async fn seed_unitsort(&self, rows: Vec<unitsort::Model>) {
        seed::insert_unitsort(&self.db, rows)
            .await
            .expect("seed unitsort rows");
    }

    pub async fn seed_pick_details(&self, rows: Vec<pick_detail::Model>) {
        seed::insert_pick_details(&self.db, rows)
            .await
            .expect("seed pick detail rows");
    }

    /// Drops a table so reads against it fail.
    pub async fn drop_table(&self, table: &str) {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                format!("DROP TABLE {table}"),
            ))
            .await
            .expect("drop table");
    }
}

pub async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Putwall row whose zone is derived from the cubby code (`PWA-...` lands in `PWA-1`).
pub fn putwall_row(
    cubby: &str,
    location_id: &str,
    container_id: &str,
    kind: &str,
    status: &str,
    replen: &str,
) -> putwall::Model {
    putwall::Model {
        id: 0,
        zone: cubby.get(..3).map(|prefix| format!("{prefix}-1")),
        cubby: text(cubby),
        pack_side_color: None,
        location_id: text(location_id),
        item_number: Some("SKU-00001".to_string()),
        container_id: text(container_id),
        hu_id: None,
        sto_location: None,
        status: text(status),
        order_number: Some("ORD-0000001".to_string()),
        priority: None,
        repln_pick_locaion: text(replen),
        pick_location: None,
        work_type: Some("PICK".to_string()),
        pick_id: None,
        kind: text(kind),
        location_group: None,
    }
}

pub fn replenishment_row(
    pack_lane: &str,
    priority: Option<&str>,
    replen_qty: i64,
    demand_qty: Option<i64>,
    from_location: &str,
) -> replenishment::Model {
    replenishment::Model {
        id: 0,
        pack_lane: text(pack_lane),
        replen_qty: Some(replen_qty),
        demand_qty,
        work_q_id: None,
        work_type: Some("REPLEN".to_string()),
        description: None,
        pick_ref_number: None,
        priority: priority.map(str::to_string),
        date_due: None,
        time_due: None,
        item_number: None,
        wh_id: Some("WH1".to_string()),
        location_id: None,
        from_location_id: text(from_location),
        work_status: Some("OPEN".to_string()),
        qty: Some(replen_qty),
        workers_required: None,
        workers_assigned: None,
        zone: None,
        employee_id: None,
        priority_overridden: None,
        datetime_stamp: None,
        sub_type: None,
        wave_id: None,
        replen_area: None,
    }
}

pub fn unitsort_row(
    container_id: &str,
    packlane: &str,
    item_count: i64,
    allocated: i64,
    unallocated: i64,
    replen: i64,
) -> unitsort::Model {
    unitsort::Model {
        id: 0,
        container_id: text(container_id),
        packlane: text(packlane),
        item_count: Some(item_count),
        order_date: None,
        released: Some(item_count / 2),
        picked: Some(0),
        allocated_picks: Some(allocated),
        unallocated_picks: Some(unallocated),
        replen_item_numbers_count: Some(replen),
        pick_items: Some(format!("[\"{container_id}-ITEM\"]")),
        replen_task_item_numbers: None,
        replen_priorities: None,
        replen_work_status: None,
        location_id: None,
    }
}

pub fn pick_line(container_id: &str, item_number: &str, status: &str) -> pick_detail::Model {
    pick_detail::Model {
        id: 0,
        container_id: text(container_id),
        order_number: Some("ORD-0000001".to_string()),
        status: text(status),
        item_number: text(item_number),
        pick_area: Some("A".to_string()),
    }
}
