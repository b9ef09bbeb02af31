//! Key event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, Focus, Screen};

impl App {
    /// Handle a key event. Release/repeat events from terminals that
    /// report them are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Detail => self.handle_detail_key(key),
            Screen::Listing => self.handle_listing_key(key),
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => self.close_detail(),
            // Favorite toggling works from the detail screen too
            KeyCode::Char('f') => {
                if let Some(record) = &self.detail {
                    let id = record.id.clone();
                    self.favorites.toggle(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_listing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            KeyCode::Esc => {
                // Esc clears an active search before it quits
                if self.focus == Focus::Search && !self.pipeline.criteria().search_term.is_empty() {
                    self.pipeline.set_search_term("");
                    self.clamp_selection();
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Categories => self.handle_categories_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.pipeline.push_search_char(c);
                self.clamp_selection();
            }
            KeyCode::Backspace => {
                self.pipeline.pop_search_char();
                self.clamp_selection();
            }
            KeyCode::Enter | KeyCode::Down => {
                self.focus = Focus::Results;
            }
            _ => {}
        }
    }

    fn handle_categories_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.move_category_cursor(-1),
            KeyCode::Right => self.move_category_cursor(1),
            KeyCode::Enter | KeyCode::Down => self.focus = Focus::Results,
            _ => self.handle_shared_command(key),
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let len = self.listing_view().visible.len();
                if len > 0 && self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => self.open_selected_detail(),
            KeyCode::Char('f') => self.toggle_selected_favorite(),
            _ => self.handle_shared_command(key),
        }
    }

    /// Commands available outside the search bar (whose printable keys
    /// belong to the term).
    fn handle_shared_command(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('v') => {
                self.pipeline.toggle_favorites_only();
                self.clamp_selection();
            }
            KeyCode::Char('m') => {
                let has_more = self.listing_view().has_more;
                if has_more {
                    self.pipeline.load_more();
                }
            }
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('[') => self.carousel.previous(),
            KeyCode::Char(']') => self.carousel.next(),
            KeyCode::Char(c @ '1'..='9') => {
                // Jump directly to a carousel slot; out of range is a no-op
                let index = (c as usize) - ('1' as usize);
                self.carousel.jump_to(index);
            }
            _ => {}
        }
    }
}
