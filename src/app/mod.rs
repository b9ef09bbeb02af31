//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - which screen is currently displayed
//! - [`Focus`] - which listing component has key focus
//! - [`AppMessage`] - messages for async communication
//!
//! The app owns the listing pipeline, the favorites store, and a handle
//! to the process-wide image cache; background work (catalog fetches,
//! image prefetch) reports back over an mpsc channel.

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, Screen};

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::cache::ImageCache;
use crate::favorites::FavoritesStore;
use crate::listing::{Carousel, ListingPipeline, ListingView};
use crate::models::{categories, promo_images, BusinessRecord, PROMO_IMAGE_COUNT};
use crate::source::{BusinessSource, SourceState};

/// Top-level application state.
pub struct App {
    pub screen: Screen,
    pub focus: Focus,
    pub should_quit: bool,

    /// Filter -> favorites scope -> pagination chain.
    pub pipeline: ListingPipeline,
    /// Persisted favorite selection.
    pub favorites: FavoritesStore,
    /// Promotional carousel index state.
    pub carousel: Carousel,
    /// Latest committed catalog snapshot plus loading/error status.
    pub source_state: SourceState,

    /// Selected row in the visible results (index into the view).
    pub selected: usize,
    /// Cursor in the category strip; 0 is "All Categories".
    pub category_cursor: usize,
    /// Record shown on the detail screen.
    pub detail: Option<BusinessRecord>,

    image_cache: Arc<ImageCache>,
    source: Arc<dyn BusinessSource>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Assemble the app and warm the promotional image set.
    pub fn new(
        favorites: FavoritesStore,
        image_cache: Arc<ImageCache>,
        source: Arc<dyn BusinessSource>,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        // The promo set is constant; warm it once at startup regardless
        // of catalog state.
        image_cache.warm(promo_images().iter().map(|p| p.url.clone()));

        Self {
            screen: Screen::Listing,
            focus: Focus::Search,
            should_quit: false,
            pipeline: ListingPipeline::new(),
            favorites,
            carousel: Carousel::new(PROMO_IMAGE_COUNT),
            source_state: SourceState::default(),
            selected: 0,
            category_cursor: 0,
            detail: None,
            image_cache,
            source,
            message_tx,
        }
    }

    /// Shared image cache handle (for the UI status bar).
    pub fn image_cache(&self) -> &Arc<ImageCache> {
        &self.image_cache
    }

    /// The computed listing for the current state.
    ///
    /// Cheap to call repeatedly: both pipeline stages are memoized.
    pub fn listing_view(&mut self) -> ListingView {
        self.pipeline
            .view(&self.source_state.snapshot, &self.favorites)
    }

    /// Kick off a catalog fetch; the result arrives as
    /// [`AppMessage::SnapshotLoaded`]. Never blocks.
    pub fn refresh(&mut self) {
        self.source_state.is_loading = true;
        let source = Arc::clone(&self.source);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch().await;
            // Receiver dropped means the app is shutting down
            let _ = tx.send(AppMessage::SnapshotLoaded(result));
        });
    }

    /// Apply a message produced by background work.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SnapshotLoaded(Ok(records)) => {
                info!("catalog snapshot loaded: {} records", records.len());
                self.source_state.apply_records(records);
                self.image_cache
                    .warm(self.source_state.snapshot.image_urls());
                self.clamp_selection();
            }
            AppMessage::SnapshotLoaded(Err(e)) => {
                info!("catalog fetch failed: {}", e);
                self.source_state.apply_error(&e);
            }
        }
    }

    /// Toggle favorite status of the currently selected record.
    pub fn toggle_selected_favorite(&mut self) {
        let view = self.listing_view();
        if let Some(record) = view.visible.get(self.selected) {
            let id = record.id.clone();
            let now = self.favorites.toggle(&id);
            info!("favorite {} -> {}", id, now);
            // Narrowing favorites-only can shrink the visible list
            self.clamp_selection();
        }
    }

    /// Open the detail screen for the selected record.
    pub fn open_selected_detail(&mut self) {
        let view = self.listing_view();
        if let Some(record) = view.visible.get(self.selected) {
            self.detail = Some(record.clone());
            self.screen = Screen::Detail;
        }
    }

    /// Leave the detail screen.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.screen = Screen::Listing;
    }

    /// Category label under the strip cursor; `None` is "All Categories".
    pub fn category_at_cursor(&self) -> Option<String> {
        if self.category_cursor == 0 {
            None
        } else {
            categories()
                .get(self.category_cursor - 1)
                .map(|c| c.slug.to_string())
        }
    }

    /// Move the category cursor and apply the selection immediately.
    pub fn move_category_cursor(&mut self, delta: isize) {
        let slots = categories().len() + 1; // plus the "All" sentinel
        let cursor = self.category_cursor as isize + delta;
        self.category_cursor = cursor.rem_euclid(slots as isize) as usize;
        self.pipeline.set_category(self.category_at_cursor());
        self.clamp_selection();
    }

    /// Keep the selection inside the visible results.
    pub fn clamp_selection(&mut self) {
        let len = self.listing_view().visible.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
