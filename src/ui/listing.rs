//! The catalog listing screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::listing::ListingView;
use crate::models::categories;

use super::carousel::render_carousel;
use super::helpers::{format_bytes, truncate_string};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FAVORITE, COLOR_FOCUS,
    COLOR_SELECTED_BG,
};

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(COLOR_FOCUS)
    } else {
        Style::default().fg(COLOR_BORDER)
    }
}

/// Render the full listing screen.
pub fn render_listing_screen(frame: &mut Frame, app: &mut App) {
    let view = app.listing_view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // promo carousel
            Constraint::Length(3), // search bar
            Constraint::Length(3), // category strip
            Constraint::Min(5),    // results
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_carousel(frame, chunks[0], app);
    render_search_bar(frame, chunks[1], app);
    render_category_strip(frame, chunks[2], app);
    render_results(frame, chunks[3], app, &view);
    render_status_bar(frame, chunks[4], app, &view);
}

fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let term = &app.pipeline.criteria().search_term;
    let focused = app.focus == Focus::Search;

    let content = if term.is_empty() && !focused {
        Line::from(Span::styled(
            "Search businesses…",
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(term.clone(), Style::default().fg(COLOR_ACCENT)),
            Span::styled(cursor, Style::default().fg(COLOR_FOCUS)),
        ])
    };

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(" search "),
    );
    frame.render_widget(widget, area);
}

fn render_category_strip(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Categories;
    let mut spans: Vec<Span> = Vec::new();

    let selected_style = Style::default()
        .fg(COLOR_FOCUS)
        .add_modifier(Modifier::BOLD);
    let plain_style = Style::default().fg(COLOR_DIM);

    let all_style = if app.category_cursor == 0 {
        selected_style
    } else {
        plain_style
    };
    spans.push(Span::styled("[All Categories]", all_style));

    for (i, category) in categories().iter().enumerate() {
        spans.push(Span::raw("  "));
        let style = if app.category_cursor == i + 1 {
            selected_style
        } else {
            plain_style
        };
        spans.push(Span::styled(category.name, style));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(" categories (← →) "),
    );
    frame.render_widget(widget, area);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App, view: &ListingView) {
    let focused = app.focus == Focus::Results;

    let title = if app.pipeline.favorites_only() {
        " businesses (favorites only) "
    } else {
        " businesses "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(title);

    // Blocking states take the whole panel
    if let Some(error) = &app.source_state.error {
        let widget = Paragraph::new(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_ERROR),
        )))
        .block(block);
        frame.render_widget(widget, area);
        return;
    }
    if app.source_state.is_loading && app.source_state.snapshot.records.is_empty() {
        let widget = Paragraph::new(Line::from(Span::styled(
            "Loading businesses…",
            Style::default().fg(COLOR_DIM),
        )))
        .block(block);
        frame.render_widget(widget, area);
        return;
    }
    if view.visible.is_empty() {
        let widget = Paragraph::new(Line::from(Span::styled(
            "No businesses available.",
            Style::default().fg(COLOR_DIM),
        )))
        .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let name_width = (area.width as usize).saturating_sub(30).max(12);
    let mut items: Vec<ListItem> = view
        .visible
        .iter()
        .map(|record| {
            let heart = if app.favorites.has(&record.id) {
                Span::styled("♥ ", Style::default().fg(COLOR_FAVORITE))
            } else {
                Span::styled("♡ ", Style::default().fg(COLOR_DIM))
            };
            let name = Span::styled(
                truncate_string(record.display_name(), name_width),
                Style::default().fg(COLOR_ACCENT),
            );
            let category = Span::styled(
                format!("  {}", record.category.as_deref().unwrap_or("-")),
                Style::default().fg(COLOR_DIM),
            );
            ListItem::new(Line::from(vec![heart, name, category]))
        })
        .collect();

    if view.has_more {
        items.push(ListItem::new(Line::from(Span::styled(
            format!(
                "— load more (m): showing {} of {} —",
                view.visible.len(),
                view.total_scoped
            ),
            Style::default().fg(COLOR_DIM),
        ))));
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(COLOR_SELECTED_BG)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    if !view.visible.is_empty() {
        state.select(Some(app.selected.min(view.visible.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, view: &ListingView) {
    let cache = app.image_cache();
    let loading = if app.source_state.is_loading {
        "  fetching…"
    } else {
        ""
    };

    let line = Line::from(vec![
        Span::styled(
            format!(
                "{} shown / {} matched  ♥ {}",
                view.visible.len(),
                view.total_scoped,
                app.favorites.len()
            ),
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::styled(
            format!(
                "  images: {} ({}){}",
                cache.len(),
                format_bytes(cache.total_bytes()),
                loading
            ),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(
            "  —  tab focus · f fav · v favs-only · m more · r refresh · q quit",
            Style::default().fg(COLOR_DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
