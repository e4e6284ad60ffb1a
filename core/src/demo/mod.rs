//! Scripted product demos

pub mod catalog;
pub mod controller;
pub mod definition;
pub mod selector;

pub use catalog::DemoCatalog;
pub use controller::{AdvanceOutcome, DemoController, DemoState, IgnoreReason};
pub use definition::{ActionControl, DemoDefinition, RestartControl, StepDefinition, Trigger};
pub use selector::DemoSelector;
