//! Free-text and category filtering over catalog snapshots.

use std::sync::Arc;

use crate::models::BusinessRecord;
use crate::source::CatalogSnapshot;

/// User-controlled filter inputs. Changed only by explicit user actions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Free-text search against record names; empty matches everything.
    pub search_term: String,
    /// Exact (case-insensitive) category match; `None` matches everything.
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither search nor category narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.category.is_none()
    }
}

/// A record passes iff all three predicates hold:
/// name contains the folded search term (absent name never matches a
/// non-empty term), category equals the folded selection exactly, and
/// the record is active. Order is preserved from the source collection.
fn record_matches(record: &BusinessRecord, criteria: &FilterCriteria) -> bool {
    if !record.active {
        return false;
    }

    if !criteria.search_term.is_empty() {
        let term = criteria.search_term.to_lowercase();
        let matches_search = record
            .name
            .as_deref()
            .map(|name| name.to_lowercase().contains(&term))
            .unwrap_or(false);
        if !matches_search {
            return false;
        }
    }

    if let Some(selected) = &criteria.category {
        let matches_category = record
            .category
            .as_deref()
            .map(|c| c.eq_ignore_ascii_case(selected))
            .unwrap_or(false);
        if !matches_category {
            return false;
        }
    }

    true
}

/// Pure, stable filter: returns the records satisfying the criteria, in
/// source order. Deterministic and side-effect free.
pub fn filter_records(records: &[BusinessRecord], criteria: &FilterCriteria) -> Vec<BusinessRecord> {
    records
        .iter()
        .filter(|record| record_matches(record, criteria))
        .cloned()
        .collect()
}

struct FilterMemo {
    generation: u64,
    criteria: FilterCriteria,
    result: Arc<Vec<BusinessRecord>>,
}

/// Memoizing wrapper around [`filter_records`].
///
/// The memo is keyed on snapshot generation plus criteria equality, so
/// the scan reruns exactly once per (snapshot, criteria) change no matter
/// how many views are taken in between. This is a performance contract:
/// criteria change on every keystroke.
#[derive(Default)]
pub struct FilterEngine {
    memo: Option<FilterMemo>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filtered collection for the given snapshot and criteria.
    ///
    /// Returns a shared handle; the favorites-scope stage uses pointer
    /// identity on it as part of its own memo key.
    pub fn filtered(
        &mut self,
        snapshot: &CatalogSnapshot,
        criteria: &FilterCriteria,
    ) -> Arc<Vec<BusinessRecord>> {
        if let Some(memo) = &self.memo {
            if memo.generation == snapshot.generation && memo.criteria == *criteria {
                return Arc::clone(&memo.result);
            }
        }

        let result = Arc::new(filter_records(&snapshot.records, criteria));
        self.memo = Some(FilterMemo {
            generation: snapshot.generation,
            criteria: criteria.clone(),
            result: Arc::clone(&result),
        });
        result
    }
}

impl std::fmt::Debug for FilterEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterEngine")
            .field("memoized", &self.memo.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<BusinessRecord> {
        vec![
            BusinessRecord::new("b1", "Cafe Central").with_category("cafes"),
            BusinessRecord::new("b2", "Corner Shop").with_category("shops"),
            BusinessRecord::new("b3", "Grand Cafe").with_category("cafes"),
            BusinessRecord::new("b4", "Closed Cafe")
                .with_category("cafes")
                .with_active(false),
            BusinessRecord::new("b5", "Riverside Cafeteria").with_category("restaurants"),
        ]
    }

    fn ids(records: &[BusinessRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_active_records_in_order() {
        let result = filter_records(&sample_records(), &FilterCriteria::new());
        assert_eq!(ids(&result), vec!["b1", "b2", "b3", "b5"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let criteria = FilterCriteria {
            search_term: "CAFE".to_string(),
            ..Default::default()
        };
        let result = filter_records(&sample_records(), &criteria);
        // "Cafeteria" contains "cafe" as a substring
        assert_eq!(ids(&result), vec!["b1", "b3", "b5"]);
    }

    #[test]
    fn test_record_without_name_never_matches_search() {
        let mut records = sample_records();
        records[0].name = None;

        let criteria = FilterCriteria {
            search_term: "cafe".to_string(),
            ..Default::default()
        };
        let result = filter_records(&records, &criteria);
        assert_eq!(ids(&result), vec!["b3", "b5"]);

        // But it still passes an empty search
        let result = filter_records(&records, &FilterCriteria::new());
        assert!(ids(&result).contains(&"b1"));
    }

    #[test]
    fn test_category_is_exact_case_insensitive_match() {
        let criteria = FilterCriteria {
            category: Some("Cafes".to_string()),
            ..Default::default()
        };
        let result = filter_records(&sample_records(), &criteria);
        assert_eq!(ids(&result), vec!["b1", "b3"]);
    }

    #[test]
    fn test_record_without_category_never_matches_selection() {
        let records = vec![BusinessRecord::new("b1", "Anon")];
        let criteria = FilterCriteria {
            category: Some("cafes".to_string()),
            ..Default::default()
        };
        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn test_inactive_records_always_excluded() {
        let criteria = FilterCriteria {
            search_term: "closed".to_string(),
            ..Default::default()
        };
        assert!(filter_records(&sample_records(), &criteria).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let criteria = FilterCriteria {
            search_term: "cafe".to_string(),
            category: Some("cafes".to_string()),
        };
        let once = filter_records(&sample_records(), &criteria);
        let twice = filter_records(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_engine_memoizes_on_generation_and_criteria() {
        let snapshot = CatalogSnapshot::new(sample_records(), 1);
        let criteria = FilterCriteria::new();
        let mut engine = FilterEngine::new();

        let first = engine.filtered(&snapshot, &criteria);
        let second = engine.filtered(&snapshot, &criteria);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_engine_recomputes_on_criteria_change() {
        let snapshot = CatalogSnapshot::new(sample_records(), 1);
        let mut engine = FilterEngine::new();

        let all = engine.filtered(&snapshot, &FilterCriteria::new());
        let narrowed = engine.filtered(
            &snapshot,
            &FilterCriteria {
                search_term: "cafe".to_string(),
                ..Default::default()
            },
        );
        assert!(!Arc::ptr_eq(&all, &narrowed));
        assert_eq!(narrowed.len(), 3);
    }

    #[test]
    fn test_engine_recomputes_on_new_generation() {
        let criteria = FilterCriteria::new();
        let mut engine = FilterEngine::new();

        let first = engine.filtered(&CatalogSnapshot::new(sample_records(), 1), &criteria);
        let second = engine.filtered(&CatalogSnapshot::new(sample_records(), 2), &criteria);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }
}
