//! Replenishment priority buckets, lane totals and grouped detail rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::{IntoParams, ToSchema};

use super::filters::{active, PredicateBuilder, TextMatch};
use super::rounded_percent;
use crate::models::{replenishment::parse_priority, starts_with_ignore_case, ReplenishmentTask};

/// Priority range label. Declaration order is presentation order.
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
pub enum PriorityBucket {
    #[serde(rename = "No Priority")]
    #[strum(serialize = "No Priority")]
    NoPriority,
    Other,
    #[serde(rename = "30-39")]
    #[strum(serialize = "30-39")]
    Range30,
    #[serde(rename = "40-49")]
    #[strum(serialize = "40-49")]
    Range40,
    #[serde(rename = "50-59")]
    #[strum(serialize = "50-59")]
    Range50,
    #[serde(rename = "60-69")]
    #[strum(serialize = "60-69")]
    Range60,
    #[serde(rename = "70-79")]
    #[strum(serialize = "70-79")]
    Range70,
    #[serde(rename = "80-89")]
    #[strum(serialize = "80-89")]
    Range80,
    #[serde(rename = "90-100")]
    #[strum(serialize = "90-100")]
    Range90,
}

impl PriorityBucket {
    /// Total over every input: null is `NoPriority`, unparseable text is `Other`.
    pub fn from_priority(raw: Option<&str>) -> Self {
        match raw {
            None => PriorityBucket::NoPriority,
            Some(text) => parse_priority(text)
                .map(Self::from_value)
                .unwrap_or(PriorityBucket::Other),
        }
    }

    pub fn from_value(value: i64) -> Self {
        match value {
            30..=39 => PriorityBucket::Range30,
            40..=49 => PriorityBucket::Range40,
            50..=59 => PriorityBucket::Range50,
            60..=69 => PriorityBucket::Range60,
            70..=79 => PriorityBucket::Range70,
            80..=89 => PriorityBucket::Range80,
            90..=100 => PriorityBucket::Range90,
            _ => PriorityBucket::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriorityBucketCount {
    pub pack_lane: Option<String>,
    pub priority_range: PriorityBucket,
    pub count: u64,
}

/// Task counts per `(pack_lane, bucket)`, ordered by lane then bucket.
pub fn summarize_by_priority(tasks: &[ReplenishmentTask]) -> Vec<PriorityBucketCount> {
    let mut counts: BTreeMap<(Option<&str>, PriorityBucket), u64> = BTreeMap::new();
    for task in tasks {
        let bucket = PriorityBucket::from_priority(task.priority.as_deref());
        *counts.entry((task.pack_lane.as_deref(), bucket)).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((pack_lane, priority_range), count)| PriorityBucketCount {
            pack_lane: pack_lane.map(str::to_string),
            priority_range,
            count,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LaneUnits {
    pub pack_lane: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LaneSummary {
    pub lanes: Vec<LaneUnits>,
    pub total_units: i64,
    /// First lane holding the largest positive unit count.
    pub highest_lane: Option<String>,
    pub highest_lane_units: i64,
    pub highest_lane_percent: i64,
    pub high_concentration: bool,
}

/// Replen units per pack lane plus the share held by the busiest lane.
pub fn summarize_lanes(tasks: &[ReplenishmentTask], concentration_threshold: u32) -> LaneSummary {
    let mut per_lane: BTreeMap<Option<&str>, i64> = BTreeMap::new();
    for task in tasks {
        *per_lane.entry(task.pack_lane.as_deref()).or_default() += task.replen_qty.unwrap_or(0);
    }

    let mut summary = LaneSummary::default();
    for (lane, count) in per_lane {
        summary.total_units += count;
        if count > summary.highest_lane_units {
            summary.highest_lane_units = count;
            summary.highest_lane = lane.map(str::to_string);
        }
        summary.lanes.push(LaneUnits {
            pack_lane: lane.map(str::to_string),
            count,
        });
    }
    summary.highest_lane_percent = rounded_percent(summary.highest_lane_units, summary.total_units);
    summary.high_concentration = summary.highest_lane_percent > i64::from(concentration_threshold);
    summary
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReplenishmentFilter {
    pub pack_lane: Option<String>,
    /// Prefix of the source location, or the whole location code
    pub zone: Option<String>,
    /// Numeric priority; non-numeric values match nothing
    pub priority: Option<String>,
    pub work_status: Option<String>,
    pub work_type: Option<String>,
}

impl ReplenishmentFilter {
    pub fn predicate(&self) -> super::filters::Predicate<ReplenishmentTask> {
        let mut builder = PredicateBuilder::new()
            .text(
                TextMatch::exact(self.pack_lane.as_deref()),
                |t: &ReplenishmentTask| t.pack_lane.as_deref(),
            )
            .text(
                TextMatch::exact(self.work_status.as_deref()),
                |t: &ReplenishmentTask| t.work_status.as_deref(),
            )
            .text(
                TextMatch::exact(self.work_type.as_deref()),
                |t: &ReplenishmentTask| t.work_type.as_deref(),
            );

        if let Some(zone) = active(self.zone.as_deref()).map(str::to_string) {
            builder = builder.clause(move |t: &ReplenishmentTask| {
                t.from_location_id
                    .as_deref()
                    .map(|location| location == zone || starts_with_ignore_case(location, &zone))
                    .unwrap_or(false)
            });
        }

        if let Some(raw) = active(self.priority.as_deref()) {
            builder = match parse_priority(raw) {
                Some(wanted) => {
                    builder.clause(move |t: &ReplenishmentTask| t.numeric_priority() == Some(wanted))
                }
                None => builder.reject_all(),
            };
        }

        builder.build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReplenishmentDetail {
    pub pack_lane: Option<String>,
    pub work_type: Option<String>,
    pub zone: Option<String>,
    pub priority: Option<String>,
    pub total_replen_units: i64,
    pub total_demand: i64,
}

/// Filtered tasks grouped by lane, work type, location zone and priority,
/// ordered by work type, zone and numeric priority.
pub fn group_details(
    tasks: &[ReplenishmentTask],
    filter: &ReplenishmentFilter,
) -> Vec<ReplenishmentDetail> {
    type GroupKey = (Option<String>, Option<String>, Option<String>, Option<String>);

    let predicate = filter.predicate();
    let mut groups: BTreeMap<GroupKey, (i64, i64)> = BTreeMap::new();
    for task in tasks.iter().filter(|task| predicate(task)) {
        let key = (
            task.pack_lane.clone(),
            task.work_type.clone(),
            task.location_zone(),
            task.priority.clone(),
        );
        let (replen, demand) = groups.entry(key).or_default();
        *replen += task.replen_qty.unwrap_or(0);
        *demand += task.demand_qty.unwrap_or(0);
    }

    let mut rows: Vec<ReplenishmentDetail> = groups
        .into_iter()
        .map(
            |((pack_lane, work_type, zone, priority), (total_replen_units, total_demand))| {
                ReplenishmentDetail {
                    pack_lane,
                    work_type,
                    zone,
                    priority,
                    total_replen_units,
                    total_demand,
                }
            },
        )
        .collect();
    rows.sort_by(|a, b| {
        let priority_key = |row: &ReplenishmentDetail| {
            (row.priority.as_deref().and_then(parse_priority), row.priority.clone())
        };
        (&a.work_type, &a.zone, priority_key(a), &a.pack_lane).cmp(&(
            &b.work_type,
            &b.zone,
            priority_key(b),
            &b.pack_lane,
        ))
    });
    rows
}
