//! Promotional carousel strip.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::promo_images;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Render the promo carousel: the visible slot's alt text, its cache
/// status, and one dot per slot.
pub fn render_carousel(frame: &mut Frame, area: Rect, app: &App) {
    let images = promo_images();
    let index = app.carousel.current();
    let image = &images[index];

    let status = match app.image_cache().get(&image.url) {
        Some(handle) => format!("{}x{}", handle.width, handle.height),
        None => "loading…".to_string(),
    };

    let dots: String = (0..images.len())
        .map(|i| if i == index { '●' } else { '○' })
        .collect::<Vec<char>>()
        .iter()
        .map(|c| format!("{c} "))
        .collect();

    let lines = vec![
        Line::from(vec![
            Span::styled("‹ ", Style::default().fg(COLOR_DIM)),
            Span::styled(image.alt.clone(), Style::default().fg(COLOR_ACCENT)),
            Span::styled(format!("  ({status})"), Style::default().fg(COLOR_DIM)),
            Span::styled(" ›", Style::default().fg(COLOR_DIM)),
        ]),
        Line::from(Span::styled(
            dots.trim_end().to_string(),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(" promotions ([ / ]) "),
    );
    frame.render_widget(widget, area);
}
