use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pickdetail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub container_id: Option<String>,
    pub order_number: Option<String>,
    pub status: Option<String>,
    pub item_number: Option<String>,
    pub pick_area: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
