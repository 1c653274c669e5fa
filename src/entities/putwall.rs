use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "putwall")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub zone: Option<String>,
    pub cubby: Option<String>,
    pub pack_side_color: Option<String>,
    pub location_id: Option<String>,
    pub item_number: Option<String>,
    pub container_id: Option<String>,
    pub hu_id: Option<String>,
    pub sto_location: Option<String>,
    pub status: Option<String>,
    pub order_number: Option<String>,
    pub priority: Option<i32>,
    pub repln_pick_locaion: Option<String>,
    pub pick_location: Option<String>,
    pub work_type: Option<String>,
    pub pick_id: Option<String>,
    #[sea_orm(column_name = "type")]
    pub kind: Option<String>,
    pub location_group: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
