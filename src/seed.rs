//! Deterministic sample rows for local exploration.
//!
//! Generators are pure functions of a seeded [`StdRng`], so the same plan
//! always yields the same tables. Every putwall bucket, every priority range
//! and both issue and healthy unit-sort containers are represented.

use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait};
use tracing::info;

use crate::entities::{pick_detail, putwall, replenishment, unitsort};

/// Rows per INSERT, kept under SQLite's bound-parameter limit.
const INSERT_BATCH: usize = 40;

const ZONES: [char; 3] = ['A', 'B', 'C'];
const PACK_LANES: [&str; 6] = ["PL01", "PL02", "PL03", "PL04", "PL05", "PL06"];
const WORK_STATUSES: [&str; 3] = ["OPEN", "RELEASED", "IN_PROGRESS"];
const SOURCE_ZONES: [&str; 4] = ["A1", "B2", "C3", "D4"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    pub seed: u64,
    pub cubbies: usize,
    pub replenishment_tasks: usize,
    pub containers: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            seed: 42,
            cubbies: 120,
            replenishment_tasks: 300,
            containers: 80,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub putwall: usize,
    pub replenishment: usize,
    pub unitsort: usize,
    pub pick_details: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    pub putwall: Vec<putwall::Model>,
    pub replenishment: Vec<replenishment::Model>,
    pub unitsort: Vec<unitsort::Model>,
    pub pick_details: Vec<pick_detail::Model>,
}

impl SampleData {
    pub fn generate(plan: &SeedPlan) -> Self {
        let mut rng = StdRng::seed_from_u64(plan.seed);
        let putwall = putwall_rows(&mut rng, plan.cubbies);
        let replenishment = replenishment_rows(&mut rng, plan.replenishment_tasks);
        let (unitsort, pick_details) = unitsort_rows(&mut rng, plan.containers);
        Self {
            putwall,
            replenishment,
            unitsort,
            pick_details,
        }
    }
}

fn sku(rng: &mut StdRng) -> String {
    format!("SKU-{:05}", rng.gen_range(1..=40_000))
}

/// One to three rows per cubby. The cubby's shape decides which bucket it lands in.
pub fn putwall_rows(rng: &mut StdRng, cubbies: usize) -> Vec<putwall::Model> {
    let mut rows = Vec::with_capacity(cubbies * 2);
    for index in 0..cubbies {
        let zone = ZONES[index % ZONES.len()];
        let cubby = format!(
            "PW{}-{:02}-{}{:02}",
            zone,
            rng.gen_range(1..=12),
            (b'A' + rng.gen_range(0..6u8)) as char,
            rng.gen_range(1..=20)
        );
        let container = format!("CT-{:06}", rng.gen_range(0..1_000_000));
        let base = putwall::Model {
            id: 0,
            zone: Some(format!("PW{}-{}", zone, 1 + index % 2)),
            cubby: Some(cubby.clone()),
            pack_side_color: Some(["RED", "BLUE", "GREEN"][rng.gen_range(0..3)].to_string()),
            location_id: Some(cubby.clone()),
            item_number: Some(sku(rng)),
            container_id: Some(container),
            hu_id: Some(format!("HU{:08}", rng.gen_range(0..100_000_000))),
            sto_location: None,
            status: Some("OPEN".to_string()),
            order_number: Some(format!("ORD-{:07}", rng.gen_range(0..10_000_000))),
            priority: Some(rng.gen_range(1..=99)),
            repln_pick_locaion: None,
            pick_location: Some(format!("P-{:03}", rng.gen_range(0..500))),
            work_type: Some(["PICK", "PUT"][rng.gen_range(0..2)].to_string()),
            pick_id: Some(format!("PK{:06}", rng.gen_range(0..1_000_000))),
            kind: Some("N".to_string()),
            location_group: Some(format!("LG{}", zone)),
        };

        match rng.gen_range(0..7) {
            0 => rows.push(putwall::Model {
                container_id: Some("NULL".to_string()),
                ..base
            }),
            1 => {
                for _ in 0..rng.gen_range(1..=3) {
                    rows.push(putwall::Model {
                        item_number: Some(sku(rng)),
                        ..base.clone()
                    });
                }
            }
            shape => {
                let mut secondary = putwall::Model {
                    location_id: Some(format!("STG-{:04}", rng.gen_range(0..10_000))),
                    item_number: Some(sku(rng)),
                    ..base.clone()
                };
                match shape {
                    2 => secondary.kind = Some("Y".to_string()),
                    3 => secondary.status = Some("RELEASED".to_string()),
                    4 => {
                        secondary.repln_pick_locaion =
                            Some(format!("REPLEN: R-{:03}", rng.gen_range(0..500)))
                    }
                    5 => secondary.repln_pick_locaion = Some("NO REPLENS".to_string()),
                    _ => {}
                }
                rows.push(base);
                rows.push(secondary);
            }
        }
    }
    rows
}

fn sample_priority(rng: &mut StdRng) -> Option<String> {
    match rng.gen_range(0..20) {
        0 | 1 => None,
        2 => Some("HOT".to_string()),
        3 => Some(rng.gen_range(0..30).to_string()),
        _ => Some(rng.gen_range(30..=100).to_string()),
    }
}

pub fn replenishment_rows(rng: &mut StdRng, tasks: usize) -> Vec<replenishment::Model> {
    (0..tasks)
        .map(|index| {
            let from_location = if rng.gen_bool(0.1) {
                "BULK".to_string()
            } else {
                format!(
                    "{}-{:02}-{:02}",
                    SOURCE_ZONES[rng.gen_range(0..SOURCE_ZONES.len())],
                    rng.gen_range(1..=40),
                    rng.gen_range(1..=8)
                )
            };
            let replen_qty = rng.gen_range(1..=48);
            replenishment::Model {
                id: 0,
                pack_lane: Some(PACK_LANES[rng.gen_range(0..PACK_LANES.len())].to_string()),
                replen_qty: Some(replen_qty),
                demand_qty: rng.gen_bool(0.8).then(|| rng.gen_range(0..=60)),
                work_q_id: Some(format!("WQ{:07}", index)),
                work_type: Some(["REPLEN", "TOPOFF"][rng.gen_range(0..2)].to_string()),
                description: Some("Replenish pick face".to_string()),
                pick_ref_number: Some(format!("REF{:06}", rng.gen_range(0..1_000_000))),
                priority: sample_priority(rng),
                date_due: Some(format!("2024-06-{:02}", rng.gen_range(1..=28))),
                time_due: Some(format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60))),
                item_number: Some(sku(rng)),
                wh_id: Some("WH1".to_string()),
                location_id: Some(format!("PF-{:04}", rng.gen_range(0..10_000))),
                from_location_id: Some(from_location),
                work_status: Some(
                    WORK_STATUSES[rng.gen_range(0..WORK_STATUSES.len())].to_string(),
                ),
                qty: Some(replen_qty),
                workers_required: Some(1),
                workers_assigned: Some(rng.gen_range(0..=1)),
                zone: None,
                employee_id: None,
                priority_overridden: Some(rng.gen_bool(0.05)),
                datetime_stamp: None,
                sub_type: None,
                wave_id: Some(format!("W{:04}", rng.gen_range(0..200))),
                replen_area: Some(["FWD", "RSV"][rng.gen_range(0..2)].to_string()),
            }
        })
        .collect()
}

/// Containers plus one pick line per item.
pub fn unitsort_rows(
    rng: &mut StdRng,
    containers: usize,
) -> (Vec<unitsort::Model>, Vec<pick_detail::Model>) {
    let mut rows = Vec::with_capacity(containers);
    let mut picks = Vec::new();
    for index in 0..containers {
        let container_id = format!("CT-{}", 100_000 + index);
        let item_count: i64 = rng.gen_range(1..=12);
        let unallocated = if rng.gen_bool(0.3) {
            rng.gen_range(1..=item_count)
        } else {
            0
        };
        let replen = if rng.gen_bool(0.35) {
            rng.gen_range(1..=4)
        } else {
            0
        };
        let released = rng.gen_range(0..=item_count);
        let items: Vec<String> = (0..item_count).map(|_| sku(rng)).collect();
        let order_number = format!("ORD-{:07}", rng.gen_range(0..10_000_000));

        for (position, item) in items.iter().enumerate() {
            picks.push(pick_detail::Model {
                id: 0,
                container_id: Some(container_id.clone()),
                order_number: Some(order_number.clone()),
                status: Some(if (position as i64) < released { "PICKED" } else { "OPEN" }.to_string()),
                item_number: Some(item.clone()),
                pick_area: Some(["A", "B", "C"][rng.gen_range(0..3)].to_string()),
            });
        }

        rows.push(unitsort::Model {
            id: 0,
            container_id: Some(container_id),
            packlane: Some(PACK_LANES[rng.gen_range(0..PACK_LANES.len())].to_string()),
            item_count: Some(item_count),
            order_date: Some(format!("2024-06-{:02}", rng.gen_range(1..=28))),
            released: Some(released),
            picked: Some(rng.gen_range(0..=released)),
            allocated_picks: Some(item_count - unallocated),
            unallocated_picks: Some(unallocated),
            replen_item_numbers_count: Some(replen),
            pick_items: serde_json::to_string(&items).ok(),
            replen_task_item_numbers: (replen > 0)
                .then(|| serde_json::to_string(&items[..(replen as usize).min(items.len())]).ok())
                .flatten(),
            replen_priorities: None,
            replen_work_status: (replen > 0).then(|| "OPEN".to_string()),
            location_id: Some(format!("US-{:03}", rng.gen_range(0..200))),
        });
    }
    (rows, picks)
}

async fn insert_batches<E, A>(db: &DatabaseConnection, rows: Vec<A>) -> Result<usize, DbErr>
where
    E: EntityTrait,
    A: ActiveModelTrait<Entity = E> + Clone + Send,
{
    let count = rows.len();
    for chunk in rows.chunks(INSERT_BATCH) {
        E::insert_many(chunk.to_vec()).exec(db).await?;
    }
    Ok(count)
}

pub async fn insert_putwall(
    db: &DatabaseConnection,
    rows: Vec<putwall::Model>,
) -> Result<usize, DbErr> {
    let models = rows
        .into_iter()
        .map(|row| {
            let mut active = putwall::ActiveModel::from(row).reset_all();
            active.id = NotSet;
            active
        })
        .collect();
    insert_batches(db, models).await
}

pub async fn insert_replenishment(
    db: &DatabaseConnection,
    rows: Vec<replenishment::Model>,
) -> Result<usize, DbErr> {
    let models = rows
        .into_iter()
        .map(|row| {
            let mut active = replenishment::ActiveModel::from(row).reset_all();
            active.id = NotSet;
            active
        })
        .collect();
    insert_batches(db, models).await
}

pub async fn insert_unitsort(
    db: &DatabaseConnection,
    rows: Vec<unitsort::Model>,
) -> Result<usize, DbErr> {
    let models = rows
        .into_iter()
        .map(|row| {
            let mut active = unitsort::ActiveModel::from(row).reset_all();
            active.id = NotSet;
            active
        })
        .collect();
    insert_batches(db, models).await
}

pub async fn insert_pick_details(
    db: &DatabaseConnection,
    rows: Vec<pick_detail::Model>,
) -> Result<usize, DbErr> {
    let models = rows
        .into_iter()
        .map(|row| {
            let mut active = pick_detail::ActiveModel::from(row).reset_all();
            active.id = NotSet;
            active
        })
        .collect();
    insert_batches(db, models).await
}

/// Removes every row from the four read tables.
pub async fn clear_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    putwall::Entity::delete_many().exec(db).await?;
    replenishment::Entity::delete_many().exec(db).await?;
    unitsort::Entity::delete_many().exec(db).await?;
    pick_detail::Entity::delete_many().exec(db).await?;
    Ok(())
}

pub async fn seed_database(db: &DatabaseConnection, plan: &SeedPlan) -> Result<SeedReport, DbErr> {
    let data = SampleData::generate(plan);
    let report = SeedReport {
        putwall: insert_putwall(db, data.putwall).await?,
        replenishment: insert_replenishment(db, data.replenishment).await?,
        unitsort: insert_unitsort(db, data.unitsort).await?,
        pick_details: insert_pick_details(db, data.pick_details).await?,
    };
    info!(
        putwall = report.putwall,
        replenishment = report.replenishment,
        unitsort = report.unitsort,
        pick_details = report.pick_details,
        "sample data inserted"
    );
    Ok(report)
}
