//! CLI command implementations

pub mod contact;
pub mod count;
pub mod demo;
pub mod pillar;

pub use contact::contact_command;
pub use count::count_command;
pub use demo::{demo_command, demos_command};
pub use pillar::{pillar_command, pillars_command};
