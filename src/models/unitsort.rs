use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::unitsort;

/// Per-container unit-sort progress. Missing counts are read as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UnitSortContainer {
    pub id: i32,
    pub container_id: Option<String>,
    pub packlane: Option<String>,
    pub item_count: i64,
    pub order_date: Option<String>,
    pub released: i64,
    pub picked: i64,
    pub allocated_picks: i64,
    pub unallocated_picks: i64,
    pub replen_item_numbers_count: i64,
    /// JSON array text listing the container's pick items.
    pub pick_items: Option<String>,
    pub replen_task_item_numbers: Option<String>,
    pub replen_priorities: Option<String>,
    pub replen_work_status: Option<String>,
    pub location_id: Option<String>,
}

impl From<unitsort::Model> for UnitSortContainer {
    fn from(row: unitsort::Model) -> Self {
        Self {
            id: row.id,
            container_id: row.container_id,
            packlane: row.packlane,
            item_count: row.item_count.unwrap_or(0),
            order_date: row.order_date,
            released: row.released.unwrap_or(0),
            picked: row.picked.unwrap_or(0),
            allocated_picks: row.allocated_picks.unwrap_or(0),
            unallocated_picks: row.unallocated_picks.unwrap_or(0),
            replen_item_numbers_count: row.replen_item_numbers_count.unwrap_or(0),
            pick_items: row.pick_items,
            replen_task_item_numbers: row.replen_task_item_numbers,
            replen_priorities: row.replen_priorities,
            replen_work_status: row.replen_work_status,
            location_id: row.location_id,
        }
    }
}

impl UnitSortContainer {
    /// A container is stuck when it has unallocated picks that are also
    /// waiting on replenishment.
    pub fn has_issue(&self) -> bool {
        self.unallocated_picks > 0 && self.replen_item_numbers_count > 0
    }
}
