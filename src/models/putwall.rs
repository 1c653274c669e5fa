use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{contains_ignore_case, starts_with_ignore_case};
use crate::entities::putwall;

/// Literal the upstream extract writes into `container_id` for an empty cubby.
pub const EMPTY_CONTAINER_MARKER: &str = "NULL";
/// `type` code for cubbies whose order is on the conveyor.
pub const ON_CONVEYOR_TYPE: &str = "Y";
pub const RELEASED_STATUS: &str = "RELEASED";

const REPLEN_PENDING_PREFIX: &str = "REPLEN:";
const NO_REPLENS_MARKER: &str = "NO REPLENS";

/// Replenishment state encoded in the `repln_pick_locaion` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReplenPointer {
    Normal,
    /// A replen task is outstanding for `location`.
    Pending { location: String },
    NoReplens,
}

impl ReplenPointer {
    /// The pending prefix is checked before the no-replens marker.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(text) = raw else {
            return ReplenPointer::Normal;
        };
        if starts_with_ignore_case(text, REPLEN_PENDING_PREFIX) {
            ReplenPointer::Pending {
                location: text[REPLEN_PENDING_PREFIX.len()..].trim().to_string(),
            }
        } else if contains_ignore_case(text, NO_REPLENS_MARKER) {
            ReplenPointer::NoReplens
        } else {
            ReplenPointer::Normal
        }
    }
}

/// One line of work assigned to a putwall cubby.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PutwallRecord {
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
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub location_group: Option<String>,
    pub replen: ReplenPointer,
}

impl From<putwall::Model> for PutwallRecord {
    fn from(row: putwall::Model) -> Self {
        let replen = ReplenPointer::parse(row.repln_pick_locaion.as_deref());
        Self {
            id: row.id,
            zone: row.zone,
            cubby: row.cubby,
            pack_side_color: row.pack_side_color,
            location_id: row.location_id,
            item_number: row.item_number,
            container_id: row.container_id,
            hu_id: row.hu_id,
            sto_location: row.sto_location,
            status: row.status,
            order_number: row.order_number,
            priority: row.priority,
            repln_pick_locaion: row.repln_pick_locaion,
            pick_location: row.pick_location,
            work_type: row.work_type,
            pick_id: row.pick_id,
            kind: row.kind,
            location_group: row.location_group,
            replen,
        }
    }
}

impl PutwallRecord {
    pub fn has_empty_container(&self) -> bool {
        self.container_id.as_deref() == Some(EMPTY_CONTAINER_MARKER)
    }

    pub fn is_on_conveyor(&self) -> bool {
        self.kind.as_deref() == Some(ON_CONVEYOR_TYPE)
    }

    pub fn is_released(&self) -> bool {
        self.status.as_deref() == Some(RELEASED_STATUS)
    }

    /// A row whose pick location differs from the cubby it is assigned to.
    /// Rows missing either side never count.
    pub fn is_secondary(&self) -> bool {
        match (self.cubby.as_deref(), self.location_id.as_deref()) {
            (Some(cubby), Some(location)) => cubby != location,
            _ => false,
        }
    }

    /// First three characters of the zone code, empty when the zone is unset.
    pub fn zone_prefix(&self) -> String {
        self.zone
            .as_deref()
            .map(|zone| zone.chars().take(3).collect())
            .unwrap_or_default()
    }
}

/// Positional breakdown of a cubby code such as `PWA-03-B12`. Every part is
/// null when the row has no cubby.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CubbyAddress {
    pub cubby: Option<String>,
    pub zone: Option<String>,
    pub wall: Option<String>,
    pub column: Option<String>,
    pub number: Option<String>,
}

impl CubbyAddress {
    /// Zone is character 3, wall characters 5-6, column character 8 and number
    /// characters 9-10 (1-based). Positions past the end of the code yield "".
    pub fn parse(cubby: &str) -> Self {
        let chars: Vec<char> = cubby.chars().collect();
        let slice = |start: usize, len: usize| -> Option<String> {
            Some(chars.iter().skip(start - 1).take(len).collect())
        };
        Self {
            cubby: Some(cubby.to_string()),
            zone: slice(3, 1),
            wall: slice(5, 2),
            column: slice(8, 1),
            number: slice(9, 2),
        }
    }

    pub fn of_row(row: &PutwallRecord) -> Self {
        row.cubby.as_deref().map(Self::parse).unwrap_or_default()
    }
}
