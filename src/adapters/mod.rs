//! Adapter implementations of the external-collaborator traits.
//!
//! Production adapters live next to their traits (`HttpBusinessSource` in
//! `source`, `FileStore` in `storage`); this module holds the in-process
//! stand-ins used by tests and offline development.

pub mod mock;

pub use mock::StaticBusinessSource;
