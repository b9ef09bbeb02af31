//! Prelude module for convenient imports.
//!
//! Re-exports the most frequently used types from the plaza library.
//!
//! # Usage
//!
//! ```ignore
//! use plaza::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage, Focus, Screen};

// Model types
pub use crate::models::{categories, promo_images, BusinessRecord, Category, PromoImage};

// Listing pipeline
pub use crate::listing::{
    filter_records, Carousel, FilterCriteria, FilterEngine, ListingPipeline, ListingView,
    PageWindow, PAGE_SIZE,
};

// Favorites and persistence
pub use crate::favorites::{FavoritesStore, FAVORITES_KEY};
pub use crate::storage::{FileStore, KeyValueStore, MemoryStore};

// Image cache
pub use crate::cache::{ImageCache, ImageError, ImageHandle};

// Source types
pub use crate::source::{
    BusinessSource, CatalogSnapshot, HttpBusinessSource, SourceError, SourceState,
};

// UI entry point
pub use crate::ui::render;
