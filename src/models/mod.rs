//! Typed work-item records built from raw table rows.
//!
//! Free-text columns that drive classification are parsed here, once, at
//! ingestion; the aggregation layer only ever sees the typed forms.

pub mod pick_detail;
pub mod putwall;
pub mod replenishment;
pub mod unitsort;

pub use pick_detail::PickDetail;
pub use putwall::{CubbyAddress, PutwallRecord, ReplenPointer};
pub use replenishment::ReplenishmentTask;
pub use unitsort::UnitSortContainer;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// The independent data sets the service reads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Domain {
    Putwall,
    Replenishment,
    #[serde(rename = "unitsort")]
    #[strum(serialize = "unitsort")]
    UnitSort,
    #[serde(rename = "container")]
    #[strum(serialize = "container")]
    PickDetail,
}

/// ASCII case-insensitive prefix test, matching SQL `LIKE 'x%'` semantics.
pub(crate) fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}

/// ASCII case-insensitive substring test, matching SQL `LIKE '%x%'` semantics.
pub(crate) fn contains_ignore_case(value: &str, needle: &str) -> bool {
    value
        .to_ascii_uppercase()
        .contains(&needle.to_ascii_uppercase())
}
