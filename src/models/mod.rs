//! Data models for the server layer.

pub mod config;

pub use config::AppConfig;
