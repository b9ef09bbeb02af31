//! Detail screen for a single business.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FAVORITE};

fn field_line(label: &str, value: Option<&str>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(COLOR_DIM)),
        Span::styled(
            value.unwrap_or("-").to_string(),
            Style::default().fg(COLOR_ACCENT),
        ),
    ])
}

/// Render the detail view for the opened record.
pub fn render_detail_screen(frame: &mut Frame, app: &mut App) {
    let area: Rect = frame.area();

    let Some(record) = app.detail.clone() else {
        // Nothing opened; the handlers route straight back to the listing
        return;
    };

    let favorite = if app.favorites.has(&record.id) {
        Span::styled("♥ favorite", Style::default().fg(COLOR_FAVORITE))
    } else {
        Span::styled("♡ press f to favorite", Style::default().fg(COLOR_DIM))
    };

    let image_line = match &record.image_url {
        Some(url) => match app.image_cache().get(url) {
            Some(handle) => Line::from(Span::styled(
                format!("image: {}x{} cached", handle.width, handle.height),
                Style::default().fg(COLOR_DIM),
            )),
            None => Line::from(Span::styled(
                "image: not loaded",
                Style::default().fg(COLOR_DIM),
            )),
        },
        None => Line::from(Span::styled("image: none", Style::default().fg(COLOR_DIM))),
    };

    let lines = vec![
        Line::from(Span::styled(
            record.display_name().to_string(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(favorite),
        Line::default(),
        field_line("category", record.category.as_deref()),
        field_line("hours", record.hours.as_deref()),
        field_line("address", record.address.as_deref()),
        Line::default(),
        image_line,
        Line::default(),
        Line::from(Span::styled(
            "esc/backspace: back to listing",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(" business "),
    );
    frame.render_widget(widget, area);
}
