//! Unit-sort totals, alert indicators, container roll-ups and the issue filter.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::filters::{PredicateBuilder, TextMatch};
use super::{rounded_percent, rounded_ratio};
use crate::config::AlertThresholds;
use crate::models::UnitSortContainer;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UnitSortSummary {
    /// Distinct non-null container ids.
    pub container_count: i64,
    pub unit_count: i64,
    pub released_units: i64,
    pub total_allocated: i64,
    pub total_unallocated: i64,
    pub total_replen: i64,
    /// Unallocated share of all picks, as a rounded percentage.
    pub unallocated_percentage: i64,
    pub replen_per_container: i64,
    pub high_unallocated: bool,
    pub high_replen: bool,
    pub alert: bool,
}

pub fn summarize(containers: &[UnitSortContainer], thresholds: &AlertThresholds) -> UnitSortSummary {
    let distinct: BTreeSet<&str> = containers
        .iter()
        .filter_map(|c| c.container_id.as_deref())
        .collect();

    let mut summary = UnitSortSummary {
        container_count: distinct.len() as i64,
        ..Default::default()
    };
    for container in containers {
        summary.unit_count += container.item_count;
        summary.released_units += container.released;
        summary.total_allocated += container.allocated_picks;
        summary.total_unallocated += container.unallocated_picks;
        summary.total_replen += container.replen_item_numbers_count;
    }

    summary.unallocated_percentage = rounded_percent(
        summary.total_unallocated,
        summary.total_allocated + summary.total_unallocated,
    );
    summary.replen_per_container = rounded_ratio(summary.total_replen, summary.container_count);
    summary.high_unallocated =
        summary.unallocated_percentage > i64::from(thresholds.unallocated_percent);
    summary.high_replen = summary.replen_per_container > i64::from(thresholds.replen_per_container);
    summary.alert = summary.high_unallocated || summary.high_replen;
    summary
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ContainerFilter {
    /// Container id prefix
    #[serde(alias = "containerId")]
    pub container_id: Option<String>,
    pub packlane: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContainerTotals {
    pub container_id: Option<String>,
    pub pick_items: Option<String>,
    pub item_count: i64,
    pub released_units: i64,
    pub allocated_units: i64,
    pub unallocated_units: i64,
}

/// Filtered rows summed per `(container_id, pick_items)`, in key order.
pub fn container_totals(
    containers: &[UnitSortContainer],
    filter: &ContainerFilter,
) -> Vec<ContainerTotals> {
    let predicate = PredicateBuilder::new()
        .text(
            TextMatch::prefix(filter.container_id.as_deref()),
            |c: &UnitSortContainer| c.container_id.as_deref(),
        )
        .text(
            TextMatch::exact(filter.packlane.as_deref()),
            |c: &UnitSortContainer| c.packlane.as_deref(),
        )
        .build();

    let mut groups: BTreeMap<(Option<&str>, Option<&str>), [i64; 4]> = BTreeMap::new();
    for container in containers.iter().filter(|c| predicate(c)) {
        let sums = groups
            .entry((container.container_id.as_deref(), container.pick_items.as_deref()))
            .or_default();
        sums[0] += container.item_count;
        sums[1] += container.released;
        sums[2] += container.allocated_picks;
        sums[3] += container.unallocated_picks;
    }

    groups
        .into_iter()
        .map(|((container_id, pick_items), [item_count, released, allocated, unallocated])| {
            ContainerTotals {
                container_id: container_id.map(str::to_string),
                pick_items: pick_items.map(str::to_string),
                item_count,
                released_units: released,
                allocated_units: allocated,
                unallocated_units: unallocated,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct IssueFilter {
    pub packlane: Option<String>,
    /// Inclusive lower bound on unallocated picks; non-numeric values match nothing
    pub min_unallocated: Option<String>,
    /// Inclusive lower bound on replen item count; non-numeric values match nothing
    pub min_replen: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IssueReport {
    pub containers: Vec<UnitSortContainer>,
    pub count: usize,
    pub average_unallocated: i64,
    pub average_replen: i64,
}

/// Issue containers passing `filter`, with half-up averages over that set.
pub fn find_issues(containers: &[UnitSortContainer], filter: &IssueFilter) -> IssueReport {
    let predicate = PredicateBuilder::new()
        .clause(UnitSortContainer::has_issue)
        .text(
            TextMatch::exact(filter.packlane.as_deref()),
            |c: &UnitSortContainer| c.packlane.as_deref(),
        )
        .at_least(filter.min_unallocated.as_deref(), |c: &UnitSortContainer| {
            c.unallocated_picks
        })
        .at_least(filter.min_replen.as_deref(), |c: &UnitSortContainer| {
            c.replen_item_numbers_count
        })
        .build();

    let selected: Vec<UnitSortContainer> =
        containers.iter().filter(|c| predicate(c)).cloned().collect();
    let count = selected.len();
    let total_unallocated: i64 = selected.iter().map(|c| c.unallocated_picks).sum();
    let total_replen: i64 = selected.iter().map(|c| c.replen_item_numbers_count).sum();

    IssueReport {
        average_unallocated: rounded_ratio(total_unallocated, count as i64),
        average_replen: rounded_ratio(total_replen, count as i64),
        count,
        containers: selected,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::entities::unitsort;

    pub(crate) fn container(id: &str, packlane: &str, unallocated: i64, replen: i64) -> UnitSortContainer {
        UnitSortContainer::from(unitsort::Model {
            id: 0,
            container_id: Some(id.to_string()),
            packlane: Some(packlane.to_string()),
            item_count: Some(4),
            order_date: None,
            released: Some(2),
            picked: Some(0),
            allocated_picks: Some(4 - unallocated.min(4)),
            unallocated_picks: Some(unallocated),
            replen_item_numbers_count: Some(replen),
            pick_items: Some(format!("[\"{id}-ITEM\"]")),
            replen_task_item_numbers: None,
            replen_priorities: None,
            replen_work_status: None,
            location_id: None,
        })
    }

    #[test]
    fn issue_predicate_needs_both_conditions() {
        let containers = [
            container("C0", "P1", 0, 5),
            container("C1", "P1", 3, 0),
            container("C2", "P1", 3, 2),
        ];
        let report = find_issues(&containers, &IssueFilter::default());
        assert_eq!(report.count, 1);
        assert_eq!(report.containers[0].container_id.as_deref(), Some("C2"));
    }

    #[test]
    fn averages_use_filtered_set_and_round_half_up() {
        let containers = [
            container("C1", "P1", 1, 1),
            container("C2", "P1", 2, 4),
            container("C3", "P2", 9, 9),
        ];
        let report = find_issues(
            &containers,
            &IssueFilter {
                packlane: Some("P1".into()),
                ..Default::default()
            },
        );
        assert_eq!(report.count, 2);
        assert_eq!(report.average_unallocated, 2);
        assert_eq!(report.average_replen, 3);
    }

    #[test]
    fn empty_filtered_set_averages_zero() {
        let containers = [container("C1", "P1", 1, 1)];
        let report = find_issues(
            &containers,
            &IssueFilter {
                min_unallocated: Some("50".into()),
                ..Default::default()
            },
        );
        assert_eq!(report.count, 0);
        assert_eq!(report.average_unallocated, 0);
        assert_eq!(report.average_replen, 0);
    }

    #[test]
    fn minimums_are_inclusive() {
        let containers = [container("C1", "P1", 3, 2), container("C2", "P1", 2, 2)];
        let report = find_issues(
            &containers,
            &IssueFilter {
                min_unallocated: Some("3".into()),
                min_replen: Some("2".into()),
                ..Default::default()
            },
        );
        assert_eq!(report.count, 1);
    }

    #[test]
    fn blank_minimums_equal_omitted_and_bad_ones_match_nothing() {
        let containers = [container("C1", "P1", 3, 2), container("C2", "P2", 1, 1)];
        let omitted = find_issues(&containers, &IssueFilter::default());
        let blank = find_issues(
            &containers,
            &IssueFilter {
                packlane: Some(String::new()),
                min_unallocated: Some(String::new()),
                min_replen: Some("  ".into()),
            },
        );
        assert_eq!(blank, omitted);
        assert_eq!(blank.count, 2);

        let bad = find_issues(
            &containers,
            &IssueFilter {
                min_replen: Some("many".into()),
                ..Default::default()
            },
        );
        assert_eq!(bad.count, 0);
        assert_eq!(bad.average_replen, 0);
    }

    #[test]
    fn summary_counts_distinct_containers_and_flags_alerts() {
        let containers = [
            container("C1", "P1", 1, 6),
            container("C1", "P1", 1, 6),
            container("C2", "P2", 0, 0),
        ];
        let summary = summarize(&containers, &AlertThresholds::default());
        assert_eq!(summary.container_count, 2);
        assert_eq!(summary.unit_count, 12);
        assert_eq!(summary.released_units, 6);
        assert_eq!(summary.total_allocated, 10);
        assert_eq!(summary.total_unallocated, 2);
        assert_eq!(summary.unallocated_percentage, 17);
        assert_eq!(summary.replen_per_container, 6);
        assert!(!summary.high_unallocated);
        assert!(summary.high_replen);
        assert!(summary.alert);
    }

    #[test]
    fn summary_of_nothing_has_no_alert() {
        let summary = summarize(&[], &AlertThresholds::default());
        assert_eq!(summary, UnitSortSummary::default());
    }

    #[test]
    fn container_totals_group_and_filter_by_prefix() {
        let containers = [
            container("CT-100", "P1", 1, 0),
            container("CT-100", "P1", 1, 0),
            container("CT-200", "P2", 0, 0),
            container("XX-300", "P1", 0, 0),
        ];
        let rows = container_totals(
            &containers,
            &ContainerFilter {
                container_id: Some("ct-".into()),
                packlane: None,
            },
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].container_id.as_deref(), Some("CT-100"));
        assert_eq!(rows[0].item_count, 8);
        assert_eq!(rows[0].unallocated_units, 2);

        let rows = container_totals(
            &containers,
            &ContainerFilter {
                container_id: Some(String::new()),
                packlane: Some("P1".into()),
            },
        );
        assert_eq!(rows.len(), 2);
    }
}
