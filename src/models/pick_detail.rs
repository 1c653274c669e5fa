use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::pick_detail;

/// One pick line of an order container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PickDetail {
    pub container_id: Option<String>,
    pub order_number: Option<String>,
    pub status: Option<String>,
    pub item_number: Option<String>,
    pub pick_area: Option<String>,
}

impl From<pick_detail::Model> for PickDetail {
    fn from(row: pick_detail::Model) -> Self {
        Self {
            container_id: row.container_id,
            order_number: row.order_number,
            status: row.status,
            item_number: row.item_number,
            pick_area: row.pick_area,
        }
    }
}
