use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "unitsort")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub container_id: Option<String>,
    pub packlane: Option<String>,
    pub item_count: Option<i64>,
    pub order_date: Option<String>,
    #[sea_orm(column_name = "RELEASED")]
    pub released: Option<i64>,
    #[sea_orm(column_name = "PICKED")]
    pub picked: Option<i64>,
    pub allocated_picks: Option<i64>,
    pub unallocated_picks: Option<i64>,
    pub replen_item_numbers_count: Option<i64>,
    pub pick_items: Option<String>,
    pub replen_task_item_numbers: Option<String>,
    pub replen_priorities: Option<String>,
    pub replen_work_status: Option<String>,
    pub location_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
