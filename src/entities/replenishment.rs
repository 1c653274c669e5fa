use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "replenishment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pack_lane: Option<String>,
    pub replen_qty: Option<i64>,
    pub demand_qty: Option<i64>,
    pub work_q_id: Option<String>,
    pub work_type: Option<String>,
    pub description: Option<String>,
    pub pick_ref_number: Option<String>,
    /// Kept as text: upstream extracts carry blanks and codes alongside numbers.
    pub priority: Option<String>,
    pub date_due: Option<String>,
    pub time_due: Option<String>,
    pub item_number: Option<String>,
    pub wh_id: Option<String>,
    pub location_id: Option<String>,
    pub from_location_id: Option<String>,
    pub work_status: Option<String>,
    pub qty: Option<i64>,
    pub workers_required: Option<i32>,
    pub workers_assigned: Option<i32>,
    pub zone: Option<String>,
    pub employee_id: Option<String>,
    pub priority_overridden: Option<bool>,
    pub datetime_stamp: Option<String>,
    pub sub_type: Option<String>,
    pub wave_id: Option<String>,
    pub replen_area: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
