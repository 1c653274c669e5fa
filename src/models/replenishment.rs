use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::replenishment;

/// A replenishment work item moving stock toward a pack lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReplenishmentTask {
    pub id: i32,
    pub pack_lane: Option<String>,
    pub replen_qty: Option<i64>,
    pub demand_qty: Option<i64>,
    pub work_q_id: Option<String>,
    pub work_type: Option<String>,
    /// Raw priority text as extracted; see `parse_priority` for interpretation.
    pub priority: Option<String>,
    pub item_number: Option<String>,
    pub location_id: Option<String>,
    pub from_location_id: Option<String>,
    pub work_status: Option<String>,
    pub zone: Option<String>,
    pub wave_id: Option<String>,
    pub replen_area: Option<String>,
}

impl From<replenishment::Model> for ReplenishmentTask {
    fn from(row: replenishment::Model) -> Self {
        Self {
            id: row.id,
            pack_lane: row.pack_lane,
            replen_qty: row.replen_qty,
            demand_qty: row.demand_qty,
            work_q_id: row.work_q_id,
            work_type: row.work_type,
            priority: row.priority,
            item_number: row.item_number,
            location_id: row.location_id,
            from_location_id: row.from_location_id,
            work_status: row.work_status,
            zone: row.zone,
            wave_id: row.wave_id,
            replen_area: row.replen_area,
        }
    }
}

impl ReplenishmentTask {
    /// Zone derived from the source location: the first two characters when the
    /// location is dash-delimited, otherwise the whole location code.
    pub fn location_zone(&self) -> Option<String> {
        self.from_location_id.as_deref().map(|location| {
            if location.contains('-') {
                location.chars().take(2).collect()
            } else {
                location.to_string()
            }
        })
    }

    pub fn numeric_priority(&self) -> Option<i64> {
        self.priority.as_deref().and_then(parse_priority)
    }
}

/// Interprets free-text priority. Integers parse directly, decimal text is
/// truncated toward zero and anything else is not a priority.
pub fn parse_priority(raw: &str) -> Option<i64> {
    let text = raw.trim();
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(from_location: Option<&str>) -> ReplenishmentTask {
        ReplenishmentTask {
            id: 1,
            pack_lane: None,
            replen_qty: None,
            demand_qty: None,
            work_q_id: None,
            work_type: None,
            priority: None,
            item_number: None,
            location_id: None,
            from_location_id: from_location.map(str::to_string),
            work_status: None,
            zone: None,
            wave_id: None,
            replen_area: None,
        }
    }

    #[test]
    fn location_zone_uses_prefix_only_for_dashed_codes() {
        assert_eq!(task(Some("A1-02-03")).location_zone().as_deref(), Some("A1"));
        assert_eq!(task(Some("BULK")).location_zone().as_deref(), Some("BULK"));
        assert_eq!(task(None).location_zone(), None);
    }

    #[test]
    fn priority_parsing() {
        assert_eq!(parse_priority("45"), Some(45));
        assert_eq!(parse_priority(" 72 "), Some(72));
        assert_eq!(parse_priority("89.9"), Some(89));
        assert_eq!(parse_priority("abc"), None);
        assert_eq!(parse_priority(""), None);
        assert_eq!(parse_priority("NaN"), None);
    }
}
