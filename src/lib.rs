//! reelgate - aggregation gateway over a movie and TV metadata provider
//!
//! This library crate exposes the core functionality for integration testing.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod model;
pub mod search;
pub mod server;
pub mod shaper;
pub mod upstream;
