//! UI rendering for the plaza catalog browser.
//!
//! Implements the terminal interface:
//! - Header: promotional image carousel with slot dots
//! - Search bar and category strip
//! - Results list with favorite markers and a "load more" footer
//! - Status bar with counts, image cache stats, and keybind hints
//! - Detail screen for a single business

mod carousel;
mod detail;
mod helpers;
mod listing;
mod theme;

pub use helpers::truncate_string;
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FAVORITE, COLOR_FOCUS,
    COLOR_SELECTED_BG,
};

use ratatui::Frame;

use crate::app::{App, Screen};
use detail::render_detail_screen;
use listing::render_listing_screen;

/// Render the UI based on the current screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Listing => render_listing_screen(frame, app),
        Screen::Detail => render_detail_screen(frame, app),
    }
}
