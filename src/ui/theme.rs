//! Color theme constants for the plaza UI.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and titles.
pub const COLOR_ACCENT: Color = Color::White;

/// Border/title color of the focused component.
pub const COLOR_FOCUS: Color = Color::LightCyan;

/// Dim text for secondary information.
pub const COLOR_DIM: Color = Color::DarkGray;

/// Favorite markers (filled hearts).
pub const COLOR_FAVORITE: Color = Color::LightRed;

/// Blocking source errors.
pub const COLOR_ERROR: Color = Color::Red;

/// Background of the selected results row.
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 30, 45);
