//! Minimal configuration module for the site core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{CounterConfig, DemoPacing, NotificationConfig, SiteConfig};
