//! Putwall cubby classification and zone roll-ups.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::{IntoParams, ToSchema};

use super::filters::{active, PredicateBuilder, TextMatch};
use crate::models::{CubbyAddress, PutwallRecord, ReplenPointer};

/// Status of a physical cubby. Variants are listed in precedence order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum CubbyStatus {
    EmptyCubby,
    PackReady,
    OnConveyor,
    PartiallyPicked,
    WaitingForReplens,
    NoReplens,
}

/// Facts collected across every row that shares a cubby code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CubbyActivity {
    pub empty_container: bool,
    pub secondary: bool,
    pub on_conveyor: bool,
    pub released: bool,
    pub replen_pending: bool,
    pub no_replens: bool,
}

impl CubbyActivity {
    pub fn observe(&mut self, row: &PutwallRecord) {
        self.empty_container |= row.has_empty_container();
        self.secondary |= row.is_secondary();
        self.on_conveyor |= row.is_on_conveyor();
        self.released |= row.is_released();
        match row.replen {
            ReplenPointer::Pending { .. } => self.replen_pending = true,
            ReplenPointer::NoReplens => self.no_replens = true,
            ReplenPointer::Normal => {}
        }
    }

    /// First matching rule wins. `None` means the cubby matches no bucket.
    pub fn classify(&self) -> Option<CubbyStatus> {
        if self.empty_container {
            Some(CubbyStatus::EmptyCubby)
        } else if !self.secondary {
            Some(CubbyStatus::PackReady)
        } else if self.on_conveyor {
            Some(CubbyStatus::OnConveyor)
        } else if self.released {
            Some(CubbyStatus::PartiallyPicked)
        } else if self.replen_pending {
            Some(CubbyStatus::WaitingForReplens)
        } else if self.no_replens {
            Some(CubbyStatus::NoReplens)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCubby {
    pub cubby: String,
    pub zone: String,
    pub status: Option<CubbyStatus>,
}

/// Classifies every distinct cubby in the snapshot, ordered by cubby code.
/// Rows without a cubby code are not physical slots and are skipped. A cubby's
/// zone is taken from the first row seen for it.
pub fn classify_cubbies(rows: &[PutwallRecord]) -> Vec<ClassifiedCubby> {
    let mut cubbies: BTreeMap<&str, (String, CubbyActivity)> = BTreeMap::new();
    for row in rows {
        let Some(cubby) = row.cubby.as_deref() else {
            continue;
        };
        let (_, activity) = cubbies
            .entry(cubby)
            .or_insert_with(|| (row.zone_prefix(), CubbyActivity::default()));
        activity.observe(row);
    }

    cubbies
        .into_iter()
        .map(|(cubby, (zone, activity))| ClassifiedCubby {
            cubby: cubby.to_string(),
            zone,
            status: activity.classify(),
        })
        .collect()
}

/// Six-bucket counts for a set of cubbies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BucketCounts {
    pub pack_ready: u64,
    pub on_conveyor: u64,
    pub partially_picked: u64,
    pub waiting_for_replens: u64,
    pub no_replens: u64,
    pub empty_cubby: u64,
    /// Sum of the six buckets. Unclassified cubbies are not included.
    pub total: u64,
}

impl BucketCounts {
    pub fn record(&mut self, status: CubbyStatus) {
        let slot = match status {
            CubbyStatus::PackReady => &mut self.pack_ready,
            CubbyStatus::OnConveyor => &mut self.on_conveyor,
            CubbyStatus::PartiallyPicked => &mut self.partially_picked,
            CubbyStatus::WaitingForReplens => &mut self.waiting_for_replens,
            CubbyStatus::NoReplens => &mut self.no_replens,
            CubbyStatus::EmptyCubby => &mut self.empty_cubby,
        };
        *slot += 1;
        self.total += 1;
    }

    pub fn count(&self, status: CubbyStatus) -> u64 {
        match status {
            CubbyStatus::PackReady => self.pack_ready,
            CubbyStatus::OnConveyor => self.on_conveyor,
            CubbyStatus::PartiallyPicked => self.partially_picked,
            CubbyStatus::WaitingForReplens => self.waiting_for_replens,
            CubbyStatus::NoReplens => self.no_replens,
            CubbyStatus::EmptyCubby => self.empty_cubby,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ZoneSummary {
    /// First three characters of the zone code.
    pub zone: String,
    #[serde(flatten)]
    pub counts: BucketCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PutwallSummary {
    pub zones: Vec<ZoneSummary>,
    pub totals: BucketCounts,
    /// Cubbies that matched none of the six rules.
    pub unclassified: u64,
}

/// Per-zone bucket counts ordered by zone. Each cubby adds at most one count.
pub fn summarize_by_zone(rows: &[PutwallRecord]) -> PutwallSummary {
    let mut zones: BTreeMap<String, BucketCounts> = BTreeMap::new();
    let mut summary = PutwallSummary::default();

    for cubby in classify_cubbies(rows) {
        let counts = zones.entry(cubby.zone).or_default();
        match cubby.status {
            Some(status) => {
                counts.record(status);
                summary.totals.record(status);
            }
            None => summary.unclassified += 1,
        }
    }

    summary.zones = zones
        .into_iter()
        .map(|(zone, counts)| ZoneSummary { zone, counts })
        .collect();
    summary
}

/// One address per snapshot row, in snapshot order.
pub fn cubby_addresses(rows: &[PutwallRecord]) -> Vec<CubbyAddress> {
    rows.iter().map(CubbyAddress::of_row).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PutwallFilter {
    /// Zone prefix
    pub zone: Option<String>,
    pub status: Option<String>,
    /// Bucket name such as `PACKREADY`; unknown names match nothing
    #[serde(alias = "cubbyStatus")]
    pub cubby_status: Option<String>,
    pub work_type: Option<String>,
}

/// Rows matching every active filter, in snapshot order.
pub fn filter_rows(rows: &[PutwallRecord], filter: &PutwallFilter) -> Vec<PutwallRecord> {
    let mut builder = PredicateBuilder::new()
        .text(TextMatch::prefix(filter.zone.as_deref()), |r: &PutwallRecord| {
            r.zone.as_deref()
        })
        .text(TextMatch::exact(filter.status.as_deref()), |r: &PutwallRecord| {
            r.status.as_deref()
        })
        .text(
            TextMatch::exact(filter.work_type.as_deref()),
            |r: &PutwallRecord| r.work_type.as_deref(),
        );

    if let Some(name) = active(filter.cubby_status.as_deref()) {
        builder = match name.parse::<CubbyStatus>() {
            Ok(wanted) => {
                let matching: HashSet<String> = classify_cubbies(rows)
                    .into_iter()
                    .filter(|cubby| cubby.status == Some(wanted))
                    .map(|cubby| cubby.cubby)
                    .collect();
                builder.clause(move |r: &PutwallRecord| {
                    r.cubby
                        .as_deref()
                        .map(|cubby| matching.contains(cubby))
                        .unwrap_or(false)
                })
            }
            Err(_) => builder.reject_all(),
        };
    }

    let predicate = builder.build();
    rows.iter().filter(|row| predicate(row)).cloned().collect()
}
