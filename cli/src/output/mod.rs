//! CLI-specific output implementations
//!
//! Terminal renderings of the site widgets and the view bindings that print
//! them.

pub mod terminal;

pub use terminal::{format_demo_frame, TerminalModalView, TerminalNoticeView};
