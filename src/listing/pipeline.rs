//! Orchestration of the filter -> favorites scope -> pagination chain.

use std::sync::Arc;

use crate::favorites::FavoritesStore;
use crate::models::BusinessRecord;
use crate::source::CatalogSnapshot;

use super::filter::{FilterCriteria, FilterEngine};
use super::pagination::PageWindow;

/// The computed listing for one render: the visible prefix plus enough
/// shape information to drive the "load more" affordance.
#[derive(Debug, Clone)]
pub struct ListingView {
    /// Records inside the pagination window, in source order.
    pub visible: Vec<BusinessRecord>,
    /// Size of the scoped collection (after filter and favorites scope,
    /// before pagination).
    pub total_scoped: usize,
    /// True when the scoped collection extends beyond the window.
    pub has_more: bool,
}

struct ScopeMemo {
    filtered: Arc<Vec<BusinessRecord>>,
    favorites_only: bool,
    favorites_revision: u64,
    result: Arc<Vec<BusinessRecord>>,
}

/// Owns the mutable session criteria and derives listing views from the
/// latest committed snapshot.
///
/// All computation here is synchronous; a view is always consistent with
/// the inputs it was derived from. Both stages are memoized so repeated
/// views between input changes are free.
pub struct ListingPipeline {
    criteria: FilterCriteria,
    favorites_only: bool,
    window: PageWindow,
    engine: FilterEngine,
    scope_memo: Option<ScopeMemo>,
}

impl ListingPipeline {
    pub fn new() -> Self {
        Self {
            criteria: FilterCriteria::new(),
            favorites_only: false,
            window: PageWindow::new(),
            engine: FilterEngine::new(),
            scope_memo: None,
        }
    }

    /// Current criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Whether the favorites-only restriction is active.
    pub fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    /// Current page (1-based).
    pub fn page(&self) -> usize {
        self.window.page()
    }

    /// Replace the search term.
    ///
    /// The page window is intentionally NOT reset; it only grows for the
    /// lifetime of the session.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
    }

    /// Append one character to the search term.
    pub fn push_search_char(&mut self, c: char) {
        self.criteria.search_term.push(c);
    }

    /// Remove the last character of the search term.
    pub fn pop_search_char(&mut self) {
        self.criteria.search_term.pop();
    }

    /// Select a category, or `None` for all categories.
    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.category = category;
    }

    /// Toggle the favorites-only restriction.
    pub fn toggle_favorites_only(&mut self) {
        self.favorites_only = !self.favorites_only;
    }

    /// Reveal one more page of results.
    pub fn load_more(&mut self) {
        self.window.load_more();
    }

    /// Compute the listing for the current criteria against `snapshot`.
    ///
    /// The favorites scope is keyed on the filtered collection identity,
    /// the favorites-only flag, and the favorites revision counter, so
    /// toggling a favorite invalidates exactly this stage and nothing
    /// upstream.
    pub fn view(&mut self, snapshot: &CatalogSnapshot, favorites: &FavoritesStore) -> ListingView {
        let filtered = self.engine.filtered(snapshot, &self.criteria);
        let scoped = self.scoped(filtered, favorites);

        ListingView {
            visible: self.window.visible(&scoped).to_vec(),
            total_scoped: scoped.len(),
            has_more: self.window.has_more(&scoped),
        }
    }

    fn scoped(
        &mut self,
        filtered: Arc<Vec<BusinessRecord>>,
        favorites: &FavoritesStore,
    ) -> Arc<Vec<BusinessRecord>> {
        if let Some(memo) = &self.scope_memo {
            if Arc::ptr_eq(&memo.filtered, &filtered)
                && memo.favorites_only == self.favorites_only
                && memo.favorites_revision == favorites.revision()
            {
                return Arc::clone(&memo.result);
            }
        }

        let result = if self.favorites_only {
            Arc::new(
                filtered
                    .iter()
                    .filter(|record| favorites.has(&record.id))
                    .cloned()
                    .collect(),
            )
        } else {
            Arc::clone(&filtered)
        };

        self.scope_memo = Some(ScopeMemo {
            filtered,
            favorites_only: self.favorites_only,
            favorites_revision: favorites.revision(),
            result: Arc::clone(&result),
        });
        result
    }
}

impl Default for ListingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ListingPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingPipeline")
            .field("criteria", &self.criteria)
            .field("favorites_only", &self.favorites_only)
            .field("page", &self.window.page())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn snapshot(count: usize) -> CatalogSnapshot {
        let records = (1..=count)
            .map(|i| BusinessRecord::new(format!("b{i}"), format!("Business {i}")))
            .collect();
        CatalogSnapshot::new(records, 1)
    }

    fn empty_favorites() -> FavoritesStore {
        FavoritesStore::load(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_view_windows_scoped_collection() {
        let mut pipeline = ListingPipeline::new();
        let favorites = empty_favorites();
        let snapshot = snapshot(10);

        let view = pipeline.view(&snapshot, &favorites);
        assert_eq!(view.visible.len(), 8);
        assert_eq!(view.total_scoped, 10);
        assert!(view.has_more);

        pipeline.load_more();
        let view = pipeline.view(&snapshot, &favorites);
        assert_eq!(view.visible.len(), 10);
        assert!(!view.has_more);
    }

    #[test]
    fn test_favorites_only_restricts_in_source_order() {
        let mut pipeline = ListingPipeline::new();
        let mut favorites = empty_favorites();
        favorites.toggle("b1");
        favorites.toggle("b3");

        pipeline.toggle_favorites_only();
        let view = pipeline.view(&snapshot(5), &favorites);

        let ids: Vec<&str> = view.visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b3"]);
        assert_eq!(view.total_scoped, 2);
    }

    #[test]
    fn test_stale_favorite_ids_are_tolerated() {
        let mut pipeline = ListingPipeline::new();
        let mut favorites = empty_favorites();
        favorites.toggle("gone-from-catalog");
        favorites.toggle("b2");

        pipeline.toggle_favorites_only();
        let view = pipeline.view(&snapshot(3), &favorites);
        let ids: Vec<&str> = view.visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b2"]);
    }

    #[test]
    fn test_toggle_favorite_invalidates_scope_stage() {
        let mut pipeline = ListingPipeline::new();
        let mut favorites = empty_favorites();
        pipeline.toggle_favorites_only();
        let snap = snapshot(5);

        let view = pipeline.view(&snap, &favorites);
        assert_eq!(view.total_scoped, 0);

        favorites.toggle("b4");
        let view = pipeline.view(&snap, &favorites);
        assert_eq!(view.total_scoped, 1);
        assert_eq!(view.visible[0].id, "b4");
    }

    #[test]
    fn test_page_survives_criteria_change() {
        let mut pipeline = ListingPipeline::new();
        let favorites = empty_favorites();
        let snap = snapshot(20);

        pipeline.load_more();
        assert_eq!(pipeline.page(), 2);

        // Narrowing the filter does not reset the window
        pipeline.set_search_term("Business 1");
        let view = pipeline.view(&snap, &favorites);
        assert_eq!(pipeline.page(), 2);
        // "Business 1" plus "Business 1x" names: b1, b10..b19
        assert_eq!(view.total_scoped, 11);
        assert!(!view.has_more);
    }

    #[test]
    fn test_search_term_editing() {
        let mut pipeline = ListingPipeline::new();
        pipeline.push_search_char('c');
        pipeline.push_search_char('a');
        assert_eq!(pipeline.criteria().search_term, "ca");
        pipeline.pop_search_char();
        assert_eq!(pipeline.criteria().search_term, "c");
    }
}
