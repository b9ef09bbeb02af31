//! Bounded visible window over the scoped collection.

/// Number of records revealed per page step.
pub const PAGE_SIZE: usize = 8;

/// A growing prefix window: page `p` exposes the first `p * PAGE_SIZE`
/// entries of the scoped collection.
///
/// The page counter is session state owned by the pipeline, not derived;
/// it only ever grows (it is not reset when criteria change).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
}

impl PageWindow {
    /// Start at page 1.
    pub fn new() -> Self {
        Self { page: 1 }
    }

    /// Current page, always >= 1.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of entries the window can expose.
    pub fn visible_count(&self) -> usize {
        self.page * PAGE_SIZE
    }

    /// Reveal one more page.
    pub fn load_more(&mut self) {
        self.page += 1;
    }

    /// The visible prefix of `scoped`.
    pub fn visible<'a, T>(&self, scoped: &'a [T]) -> &'a [T] {
        let count = self.visible_count().min(scoped.len());
        &scoped[..count]
    }

    /// Whether `scoped` extends beyond the window, i.e. whether the
    /// "load more" affordance should be offered.
    pub fn has_more<T>(&self, scoped: &[T]) -> bool {
        self.visible_count() < scoped.len()
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new()
    }
}
