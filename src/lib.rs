//! Plaza - a terminal browser for a local business directory
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cache;
pub mod cli;
pub mod favorites;
pub mod listing;
pub mod models;
pub mod prelude;
pub mod source;
pub mod startup;
pub mod storage;
pub mod terminal;
pub mod ui;
