//! # Nexa site core
//!
//! Interactivity behind the Nexa marketing site: the scripted product demos,
//! the pillar information overlay and the contact form.
//!
//! Every widget is an explicit controller constructed over its own view
//! binding (see [`view`]), so the behavior can be driven and inspected
//! without a document tree.

pub mod animation;
pub mod config;
pub mod contact;
pub mod demo;
pub mod error;
pub mod pillar;
pub mod task;
pub mod view;

// Re-export commonly used types
pub use config::SiteConfig;
pub use demo::{AdvanceOutcome, DemoCatalog, DemoController, DemoState};
pub use error::{Error, Result};
pub use pillar::{PillarCatalog, PillarModalPresenter};
pub use task::{DelayedTask, TaskOutcome};
