//! Fixed promotional image set for the header carousel.

use once_cell::sync::Lazy;

/// Number of images in the promotional carousel.
pub const PROMO_IMAGE_COUNT: usize = 3;

/// One promotional carousel entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PromoImage {
    pub id: u32,
    pub url: String,
    pub alt: String,
}

static PROMO_IMAGES: Lazy<Vec<PromoImage>> = Lazy::new(|| {
    vec![
        PromoImage {
            id: 1,
            url: "https://epriqvuqygtntgabedhf.supabase.co/storage/v1/object/public/images/profile-1.webp".to_string(),
            alt: "Promotion 1".to_string(),
        },
        PromoImage {
            id: 2,
            url: "https://epriqvuqygtntgabedhf.supabase.co/storage/v1/object/public/images/profile-2.webp".to_string(),
            alt: "Promotion 2".to_string(),
        },
        PromoImage {
            id: 3,
            url: "https://epriqvuqygtntgabedhf.supabase.co/storage/v1/object/public/images/profile-3.webp".to_string(),
            alt: "Promotion 3".to_string(),
        },
    ]
});

/// The ordered promotional set. Warmed into the image cache once at
/// startup regardless of catalog state.
pub fn promo_images() -> &'static [PromoImage] {
    &PROMO_IMAGES
}
