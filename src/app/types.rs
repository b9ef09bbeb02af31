//! Core enums for screen and focus state.

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The catalog listing (carousel, search, categories, results).
    Listing,
    /// Detail view for a single business.
    Detail,
}

/// Which listing component receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Free-text search bar; printable keys edit the term.
    Search,
    /// Category strip; left/right move the selection.
    Categories,
    /// Results list; up/down move the selection.
    Results,
}

impl Focus {
    /// Cycle focus forward: Search -> Categories -> Results -> Search.
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Categories,
            Focus::Categories => Focus::Results,
            Focus::Results => Focus::Search,
        }
    }

    /// Cycle focus backward.
    pub fn previous(self) -> Self {
        match self {
            Focus::Search => Focus::Results,
            Focus::Categories => Focus::Search,
            Focus::Results => Focus::Categories,
        }
    }
}
