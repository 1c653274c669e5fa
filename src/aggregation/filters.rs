//! Optional filter values turned into row predicates.
//!
//! Absent and blank values impose no constraint. Active clauses combine with
//! logical AND; a builder with no clauses accepts every row.

use crate::models::starts_with_ignore_case;

pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Trims a raw filter value, treating blank input as absent.
pub fn active(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Match rule for a single text column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Exact(String),
    /// Case-insensitive leading match.
    Prefix(String),
}

impl TextMatch {
    pub fn exact(raw: Option<&str>) -> Option<Self> {
        active(raw).map(|value| TextMatch::Exact(value.to_string()))
    }

    pub fn prefix(raw: Option<&str>) -> Option<Self> {
        active(raw).map(|value| TextMatch::Prefix(value.to_string()))
    }

    /// A missing column value never matches an active filter.
    pub fn matches(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            TextMatch::Exact(expected) => value == expected,
            TextMatch::Prefix(prefix) => starts_with_ignore_case(value, prefix),
        }
    }
}

pub struct PredicateBuilder<T> {
    clauses: Vec<Predicate<T>>,
}

impl<T: 'static> Default for PredicateBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> PredicateBuilder<T> {
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// Adds a text clause when `matcher` is active.
    pub fn text(self, matcher: Option<TextMatch>, field: fn(&T) -> Option<&str>) -> Self {
        match matcher {
            Some(matcher) => self.clause(move |row| matcher.matches(field(row))),
            None => self,
        }
    }

    pub fn clause(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.clauses.push(Box::new(predicate));
        self
    }

    /// Adds a clause that rejects every row.
    pub fn reject_all(self) -> Self {
        self.clause(|_| false)
    }

    /// Adds an inclusive lower bound on `field` when `raw` is active. A value
    /// that is not an integer matches nothing.
    pub fn at_least(self, raw: Option<&str>, field: fn(&T) -> i64) -> Self {
        match active(raw).map(str::parse::<i64>) {
            Some(Ok(min)) => self.clause(move |row| field(row) >= min),
            Some(Err(_)) => self.reject_all(),
            None => self,
        }
    }

    pub fn build(self) -> Predicate<T> {
        let clauses = self.clauses;
        Box::new(move |row| clauses.iter().all(|clause| clause(row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        zone: Option<String>,
        status: Option<String>,
        qty: i64,
    }

    fn row(zone: &str, status: &str) -> Row {
        Row {
            zone: Some(zone.to_string()),
            status: Some(status.to_string()),
            qty: 3,
        }
    }

    fn build(zone: Option<&str>, status: Option<&str>) -> Predicate<Row> {
        PredicateBuilder::new()
            .text(TextMatch::prefix(zone), |r: &Row| r.zone.as_deref())
            .text(TextMatch::exact(status), |r: &Row| r.status.as_deref())
            .build()
    }

    #[test]
    fn blank_filter_is_same_as_absent() {
        assert_eq!(TextMatch::exact(Some("")), None);
        assert_eq!(TextMatch::prefix(Some("   ")), None);
        let rows = [row("A1", "OPEN"), row("B2", "DONE")];
        let omitted = build(None, None);
        let blank = build(Some(""), Some(""));
        assert!(rows.iter().all(|r| omitted(r) && blank(r)));
    }

    #[test]
    fn filters_intersect() {
        let predicate = build(Some("A"), Some("OPEN"));
        assert!(predicate(&row("A1", "OPEN")));
        assert!(!predicate(&row("A1", "DONE")));
        assert!(!predicate(&row("B1", "OPEN")));
    }

    #[test]
    fn prefix_ignores_case_but_exact_does_not() {
        let predicate = build(Some("a"), Some("open"));
        assert!(!predicate(&row("A1", "OPEN")));
        assert!(build(Some("a"), None)(&row("A1", "OPEN")));
    }

    #[test]
    fn missing_column_never_matches_active_filter() {
        let predicate = build(None, Some("OPEN"));
        assert!(!predicate(&Row {
            zone: None,
            status: None,
            qty: 0,
        }));
    }

    #[test]
    fn reject_all_matches_nothing() {
        let predicate = PredicateBuilder::<Row>::new().reject_all().build();
        assert!(!predicate(&row("A1", "OPEN")));
    }

    #[test]
    fn lower_bound_is_inclusive_and_blank_is_absent() {
        let qty = |r: &Row| r.qty;
        let at_three = PredicateBuilder::new().at_least(Some(" 3 "), qty).build();
        let at_four = PredicateBuilder::new().at_least(Some("4"), qty).build();
        let blank = PredicateBuilder::new().at_least(Some(""), qty).build();
        assert!(at_three(&row("A1", "OPEN")));
        assert!(!at_four(&row("A1", "OPEN")));
        assert!(blank(&row("A1", "OPEN")));
    }

    #[test]
    fn non_numeric_lower_bound_matches_nothing() {
        let predicate = PredicateBuilder::new()
            .at_least(Some("lots"), |r: &Row| r.qty)
            .build();
        assert!(!predicate(&row("A1", "OPEN")));
    }
}
