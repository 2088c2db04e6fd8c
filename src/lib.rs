//! Charcoal - colorized ASCII art server
//!
//! Thin HTTP and CLI front for the `ascii-art` conversion crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
