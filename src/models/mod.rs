//! Data model types for the business directory.
//!
//! This module contains the catalog record type plus the fixed tables the
//! UI is built around:
//! - [`BusinessRecord`] - one catalog entry, owned by the remote source
//! - [`Category`] - entries for the category strip
//! - [`PromoImage`] - the fixed promotional carousel set

mod business;
mod category;
mod promo;

pub use business::BusinessRecord;
pub use category::{categories, Category};
pub use promo::{promo_images, PromoImage, PROMO_IMAGE_COUNT};
