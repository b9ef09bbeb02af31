//! Common test utilities for integration tests.
//!
//! Provides record fixtures and a valid PNG payload for image cache
//! tests.

// Each integration test binary compiles this module separately and uses
// a different subset of it.
#![allow(dead_code)]

use plaza::models::BusinessRecord;

/// A minimal valid 1x1 PNG.
pub const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
    0x60, 0xf8, 0x5f, 0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// `count` sequential active records named "Business N" with ids "bN".
pub fn sample_records(count: usize) -> Vec<BusinessRecord> {
    (1..=count)
        .map(|i| BusinessRecord::new(format!("b{i}"), format!("Business {i}")))
        .collect()
}

/// A small mixed catalog used by the filtering scenarios.
pub fn mixed_catalog() -> Vec<BusinessRecord> {
    vec![
        BusinessRecord::new("b1", "Cafe Central")
            .with_category("cafes")
            .with_hours("8:00 - 18:00")
            .with_address("12 Main St"),
        BusinessRecord::new("b2", "Corner Shop").with_category("shops"),
        BusinessRecord::new("b3", "Grand Cafe").with_category("cafes"),
        BusinessRecord::new("b4", "Closed Cafe")
            .with_category("cafes")
            .with_active(false),
        BusinessRecord::new("b5", "Riverside Cafeteria").with_category("restaurants"),
    ]
}
